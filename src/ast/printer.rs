//! S-expression rendering of the AST.
//!
//! Spans are left out, so two trees that differ only in layout or
//! comments print identically:
//!
//! ```text
//! x := 1 + 2 * 3        (:= x (+ 1 (* 2 3)))
//! fn f(a) { g(a)? }     (fn f [a] (block (call? g a)))
//! ```

use std::fmt::{Display, Formatter, Result};

use super::{
    ast::{Ident, Item, Program},
    definitions::{Definition, FunctionDef},
    expressions::{ArmBody, Expr, ExprKind, MatchArm},
    statements::{Block, Stmt, StmtKind},
};

fn write_spaced<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> Result {
    for item in items {
        write!(f, " {}", item)?;
    }
    Ok(())
}

fn write_parameters(f: &mut Formatter<'_>, parameters: &[Ident]) -> Result {
    write!(f, " [")?;
    for (i, parameter) in parameters.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", parameter)?;
    }
    write!(f, "]")
}

fn write_string(f: &mut Formatter<'_>, value: &str) -> Result {
    write!(f, "'")?;
    for ch in value.chars() {
        match ch {
            '\'' => write!(f, "\\'")?,
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\t' => write!(f, "\\t")?,
            '\r' => write!(f, "\\r")?,
            '\0' => write!(f, "\\0")?,
            _ => write!(f, "{}", ch)?,
        }
    }
    write!(f, "'")
}

impl Display for Ident {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.value)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self.kind {
            ExprKind::Number(value) => write!(f, "{}", value),
            ExprKind::Bool(value) => write!(f, "{}", value),
            ExprKind::String(value) => write_string(f, value),
            ExprKind::List(items) => {
                write!(f, "(list")?;
                write_spaced(f, items)?;
                write!(f, ")")
            }
            ExprKind::Map(pairs) => {
                write!(f, "(map")?;
                for pair in pairs {
                    write!(f, " (: {} {})", pair.key, pair.value)?;
                }
                write!(f, ")")
            }
            ExprKind::Symbol(name) => write!(f, "{}", name),
            ExprKind::Member { object, property } => write!(f, "(. {} {})", object, property),
            ExprKind::Call {
                callee,
                arguments,
                propagate,
            } => {
                write!(f, "({} {}", if *propagate { "call?" } else { "call" }, callee)?;
                write_spaced(f, arguments)?;
                write!(f, ")")
            }
            ExprKind::Binary {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", operator.symbol(), left, right),
            ExprKind::Unary { operator, operand } => {
                write!(f, "({} {})", operator.symbol(), operand)
            }
            ExprKind::New {
                type_name,
                arguments,
            } => {
                write!(f, "(new {}", type_name)?;
                write_spaced(f, arguments)?;
                write!(f, ")")
            }
            ExprKind::Match(expr) => {
                write!(f, "(match {}", expr.scrutinee)?;
                for case in &expr.cases {
                    write!(f, " (case {})", case)?;
                }
                if let Some(default) = &expr.default {
                    write!(f, " (default {})", default)?;
                }
                write!(f, ")")
            }
            ExprKind::Lambda { parameters, body } => {
                write!(f, "(lambda")?;
                write_parameters(f, parameters)?;
                write!(f, " {})", body)
            }
            ExprKind::AnonymousFn { parameters, body } => {
                write!(f, "(fn")?;
                write_parameters(f, parameters)?;
                write!(f, " {})", body)
            }
        }
    }
}

impl Display for MatchArm {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self.body {
            ArmBody::Expr(body) => write!(f, "{} {}", self.pattern, body),
            ArmBody::Block(body) => write!(f, "{} {}", self.pattern, body),
        }
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "(block")?;
        write_spaced(f, &self.body)?;
        write!(f, ")")
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self.kind {
            StmtKind::Return(value) => write!(f, "(return {})", value),
            StmtKind::While { condition, body } => write!(f, "(while {} {})", condition, body),
            StmtKind::If(stmt) => {
                write!(f, "(if {} {}", stmt.condition, stmt.then_body)?;
                for elif in &stmt.elifs {
                    write!(f, " (elif {} {})", elif.condition, elif.body)?;
                }
                if let Some(else_body) = &stmt.else_body {
                    write!(f, " (else {})", else_body)?;
                }
                write!(f, ")")
            }
            StmtKind::For {
                variable,
                iterable,
                body,
            } => write!(f, "(for {} {} {})", variable, iterable, body),
            StmtKind::Break => write!(f, "(break)"),
            StmtKind::Continue => write!(f, "(continue)"),
            StmtKind::Expression(expr) => write!(f, "{}", expr),
            StmtKind::Native { name, symbol } => {
                write!(f, "(native {} ", name)?;
                write_string(f, symbol)?;
                write!(f, ")")
            }
            StmtKind::Import(imports) => {
                write!(f, "(import")?;
                for import in imports {
                    write!(f, " (")?;
                    write_string(f, &import.path)?;
                    if let Some(alias) = &import.alias {
                        write!(f, " with {}", alias)?;
                    }
                    write!(f, ")")?;
                }
                write!(f, ")")
            }
            StmtKind::Assign {
                target,
                operator,
                value,
            } => write!(f, "({} {} {})", operator.symbol(), target, value),
            StmtKind::Define { target, value } => write!(f, "(:= {} {})", target, value),
            StmtKind::Function(def) => write!(f, "{}", def),
        }
    }
}

impl Display for FunctionDef {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "(fn {}", self.name)?;
        if let Some(parameters) = &self.parameters {
            write_parameters(f, parameters)?;
        }
        if let Some(body) = &self.body {
            write!(f, " {}", body)?;
        }
        write!(f, ")")
    }
}

impl Display for Definition {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Definition::Function(def) => write!(f, "{}", def),
            Definition::Trait(def) => {
                write!(f, "(trait {}", def.name)?;
                write_spaced(f, &def.methods)?;
                write!(f, ")")
            }
            Definition::Type(def) => {
                write!(f, "(type {}", def.name)?;
                if let Some(parameters) = &def.parameters {
                    write_parameters(f, parameters)?;
                }
                if let Some(traits) = &def.traits {
                    write!(f, " (impl")?;
                    write_spaced(f, traits)?;
                    write!(f, ")")?;
                }
                if let Some(body) = &def.body {
                    write!(f, " {}", body)?;
                }
                write!(f, ")")
            }
            Definition::Unit(def) => {
                write!(f, "(unit {}", def.name)?;
                if let Some(body) = &def.body {
                    write!(f, " {}", body)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Item::Definition(definition) => write!(f, "{}", definition),
            Item::Statement(stmt) => write!(f, "{}", stmt),
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}
