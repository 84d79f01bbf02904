use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::{ast::Item, expressions::Expr, statements::Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, items::*, parser::Parser, stmt::*};

/// Binding strength of infix operators, weakest first. All binary tiers
/// are left associative.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Logical,
    Equality,
    Relational,
    Range,
    Impls,
    Additive,
    Multiplicative,
    Unary,
}

pub type ItemHandler = fn(&mut Parser) -> Result<Item, Error>;
pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

pub type ItemLookup = HashMap<TokenKind, ItemHandler>;
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

/// Dispatch tables keyed by the token that starts (or continues) a
/// production. Built once and shared by every parse.
#[derive(Default)]
pub struct Lookups {
    pub item_lookup: ItemLookup,
    pub stmt_lookup: StmtLookup,
    pub nud_lookup: NUDLookup,
    pub led_lookup: LEDLookup,
    pub binding_power_lookup: BPLookup,
}

impl Lookups {
    /// Registers a left denotation (infix) handler for a token.
    fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a block statement handler for a token.
    fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a handler for a token that only starts top-level items.
    fn item(&mut self, kind: TokenKind, item_fn: ItemHandler) {
        self.item_lookup.insert(kind, item_fn);
    }

    pub fn binding_power(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }
}

fn create_token_lookups() -> Lookups {
    let mut lookups = Lookups::default();

    // Logical
    lookups.led(TokenKind::And, BindingPower::Logical, parse_binary_expr);
    lookups.led(TokenKind::Or, BindingPower::Logical, parse_binary_expr);

    // Equality and relational
    lookups.led(TokenKind::Equals, BindingPower::Equality, parse_binary_expr);
    lookups.led(TokenKind::NotEquals, BindingPower::Equality, parse_binary_expr);
    lookups.led(TokenKind::Less, BindingPower::Relational, parse_binary_expr);
    lookups.led(TokenKind::LessEquals, BindingPower::Relational, parse_binary_expr);
    lookups.led(TokenKind::Greater, BindingPower::Relational, parse_binary_expr);
    lookups.led(TokenKind::GreaterEquals, BindingPower::Relational, parse_binary_expr);

    lookups.led(TokenKind::DotDot, BindingPower::Range, parse_binary_expr);
    lookups.led(TokenKind::Impls, BindingPower::Impls, parse_binary_expr);

    // Additive and multiplicative
    lookups.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    lookups.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    lookups.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    lookups.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);
    lookups.led(TokenKind::Percent, BindingPower::Multiplicative, parse_binary_expr);

    // Literals and symbols
    lookups.nud(TokenKind::Number, parse_primary_expr);
    lookups.nud(TokenKind::String, parse_primary_expr);
    lookups.nud(TokenKind::True, parse_primary_expr);
    lookups.nud(TokenKind::False, parse_primary_expr);
    lookups.nud(TokenKind::Identifier, parse_postfix_expr);
    lookups.nud(TokenKind::OpenBracket, parse_list_expr);
    lookups.nud(TokenKind::OpenCurly, parse_map_expr);
    lookups.nud(TokenKind::Dash, parse_prefix_expr);
    lookups.nud(TokenKind::Not, parse_prefix_expr);
    lookups.nud(TokenKind::OpenParen, parse_grouping_expr);
    lookups.nud(TokenKind::New, parse_new_expr);
    lookups.nud(TokenKind::Match, parse_match_expr);
    lookups.nud(TokenKind::Lambda, parse_lambda_expr);
    lookups.nud(TokenKind::Fn, parse_anonymous_fn_expr);

    // Statements
    lookups.stmt(TokenKind::Return, parse_return_stmt);
    lookups.stmt(TokenKind::While, parse_while_stmt);
    lookups.stmt(TokenKind::If, parse_if_stmt);
    lookups.stmt(TokenKind::For, parse_for_stmt);
    lookups.stmt(TokenKind::Break, parse_break_stmt);
    lookups.stmt(TokenKind::Continue, parse_continue_stmt);
    lookups.stmt(TokenKind::Native, parse_native_stmt);
    lookups.stmt(TokenKind::Fn, parse_fn_stmt);

    // Top-level only
    lookups.item(TokenKind::Fn, parse_fn_item);
    lookups.item(TokenKind::Trait, parse_trait_item);
    lookups.item(TokenKind::Type, parse_type_item);
    lookups.item(TokenKind::Unit, parse_unit_item);
    lookups.item(TokenKind::Import, parse_import_item);

    lookups
}

lazy_static! {
    pub static ref LOOKUPS: Lookups = create_token_lookups();
}
