use crate::frontend::ast::*;
use crate::session::Session;

/// Renders an AST back to source text, fully disambiguated: every binary
/// and assignment node is wrapped in parentheses, so re-parsing the output
/// reconstructs the same tree.
pub struct AstPrinter<'sess> {
    session: &'sess Session,
    output: String,
}

impl<'sess> AstPrinter<'sess> {
    pub fn new(session: &'sess Session) -> Self {
        Self {
            session,
            output: String::new(),
        }
    }

    pub fn print_module(mut self, module: &Module) -> String {
        match &module.item {
            Item::FuncDecl(func) => self.func_decl(func),
        }

        self.output
    }

    pub fn print_statement(mut self, stmt: &Stmt) -> String {
        self.stmt(stmt);
        self.output
    }

    pub fn print_expression(mut self, expr: &Expr) -> String {
        self.expr(expr);
        self.output
    }

    fn func_decl(&mut self, f: &FuncDecl) {
        let name = self.session.lookup_str(f.name);

        self.push(format!("int {name} () {{\n"));
        for stmt in &f.statements {
            self.stmt(stmt);
        }
        self.push("}\n");
    }

    fn stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Return(expr) => {
                self.push("return ");
                self.expr(expr);
                self.push(";\n");
            }

            Stmt::Expr(expr) => {
                self.expr(expr);
                self.push(";\n");
            }

            Stmt::Declare { name, init } => {
                let name = self.session.lookup_str(*name);
                self.push(format!("int {name}"));

                if let Some(init) = init {
                    self.push(" = ");
                    self.expr(init);
                }

                self.push(";\n");
            }
        }
    }

    fn expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Constant(n) => self.push(n.to_string()),

            Expr::Var(name) => {
                let name = self.session.lookup_str(*name);
                self.push(name);
            }

            Expr::UnOp { op, expr } => {
                self.push(unop_symbol(*op));
                self.expr(expr);
            }

            Expr::BinOp { op, lhs, rhs } => {
                self.push("(");
                self.expr(lhs);
                self.push(format!(" {} ", binop_symbol(*op)));
                self.expr(rhs);
                self.push(")");
            }

            Expr::Assign { name, expr } => {
                let name = self.session.lookup_str(*name);
                self.push(format!("({name} = "));
                self.expr(expr);
                self.push(")");
            }
        }
    }

    fn push(&mut self, s: impl AsRef<str>) {
        self.output.push_str(s.as_ref());
    }
}

fn unop_symbol(op: UnOp) -> &'static str {
    match op {
        UnOp::Negate => "-",
        UnOp::BitwiseInvert => "~",
        UnOp::LogicalNot => "!",
    }
}

fn binop_symbol(op: BinOp) -> &'static str {
    match op {
        BinOp::Add => "+",
        BinOp::Sub => "-",
        BinOp::Mul => "*",
        BinOp::Div => "/",
        BinOp::Mod => "%",
        BinOp::Equal => "==",
        BinOp::NotEqual => "!=",
        BinOp::Gt => ">",
        BinOp::Lt => "<",
        BinOp::GtEq => ">=",
        BinOp::LtEq => "<=",
        BinOp::LogicalAnd => "&&",
        BinOp::LogicalOr => "||",
        BinOp::BitwiseAnd => "&",
        BinOp::BitwiseOr => "|",
        BinOp::BitwiseXor => "^",
        BinOp::ShiftLeft => "<<",
        BinOp::ShiftRight => ">>",
    }
}
