//! Statement rewriting: scope push/pop on `Compound`, transparent recursion
//! everywhere else, per §4.3.
use crate::ast::{ForInit, Stmt};
use crate::error::MinifyError;

use super::Rewriter;

impl Rewriter {
    pub(super) fn rewrite_stmt(&mut self, stmt: &mut Stmt) -> Result<(), MinifyError> {
        match stmt {
            Stmt::Compound(compound) => {
                self.scope.push();
                for inner in &mut compound.stmts {
                    self.rewrite_stmt(inner)?;
                }
                self.scope.pop();
                Ok(())
            }
            Stmt::If(if_stmt) => {
                self.rewrite_expr(&mut if_stmt.cond)?;
                self.rewrite_stmt(&mut if_stmt.then_branch)?;
                if let Some(else_branch) = &mut if_stmt.else_branch {
                    self.rewrite_stmt(else_branch)?;
                }
                Ok(())
            }
            Stmt::For(for_stmt) => {
                // A `for` init-declaration's scope spans the whole
                // statement, including the condition, step, and body — not
                // just the enclosing compound.
                self.scope.push();
                match &mut for_stmt.init {
                    ForInit::Decl(decl) => self.rewrite_decl(decl)?,
                    ForInit::Expr(expr) => {
                        self.rewrite_expr(expr)?;
                    }
                    ForInit::None => {}
                }
                if let Some(cond) = &mut for_stmt.cond {
                    self.rewrite_expr(cond)?;
                }
                if let Some(step) = &mut for_stmt.step {
                    self.rewrite_expr(step)?;
                }
                self.rewrite_stmt(&mut for_stmt.body)?;
                self.scope.pop();
                Ok(())
            }
            Stmt::While(while_stmt) => {
                self.rewrite_expr(&mut while_stmt.cond)?;
                self.rewrite_stmt(&mut while_stmt.body)
            }
            Stmt::DoWhile(do_while) => {
                self.rewrite_stmt(&mut do_while.body)?;
                self.rewrite_expr(&mut do_while.cond)?;
                Ok(())
            }
            Stmt::Switch(switch) => {
                self.rewrite_expr(&mut switch.cond)?;
                self.rewrite_stmt(&mut switch.body)
            }
            Stmt::Case(case) => {
                self.rewrite_expr(&mut case.value)?;
                for inner in &mut case.stmts {
                    self.rewrite_stmt(inner)?;
                }
                Ok(())
            }
            Stmt::Default(default) => {
                for inner in &mut default.stmts {
                    self.rewrite_stmt(inner)?;
                }
                Ok(())
            }
            Stmt::Return(ret) => {
                if let Some(value) = &mut ret.value {
                    self.rewrite_expr(value)?;
                }
                Ok(())
            }
            Stmt::Break(_) | Stmt::Continue(_) | Stmt::Pragma(_) | Stmt::Empty(_) => Ok(()),
            Stmt::Typedef(typedef) => self.rewrite_typedef(typedef),
            Stmt::Decl(decl) => self.rewrite_decl(decl),
            Stmt::Expr(expr) => {
                self.rewrite_expr(expr)?;
                Ok(())
            }
        }
    }
}
