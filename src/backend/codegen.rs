use crate::frontend::ast::*;
use crate::session::{InternedStr, Session};

#[derive(thiserror::Error, Debug)]
pub enum CodegenError {
    #[error("unknown variable `{0}`")]
    UnknownVariable(String),
}

pub type CodegenResult<T> = Result<T, CodegenError>;

/// Lowers an AST to x86-64 AT&T assembly text.
///
/// Every expression evaluates into `%eax`. Binary operators spill one
/// operand to the machine stack (or a scratch register) around the
/// evaluation of the other; locals live in 8-byte slots below `%rbp`.
pub struct CodeGenerator<'sess> {
    session: &'sess Session,
    output: String,

    label_counter: u32,

    locals: Vec<(InternedStr, i64)>,
    stack_offset: i64,
}

impl<'sess> CodeGenerator<'sess> {
    pub fn new(session: &'sess Session) -> Self {
        Self {
            session,
            output: String::new(),

            label_counter: 0,

            locals: vec![],
            stack_offset: 0,
        }
    }

    pub fn run(mut self, module: &Module) -> CodegenResult<String> {
        match &module.item {
            Item::FuncDecl(func) => self.gen_func_decl(func)?,
        }

        Ok(self.output)
    }

    fn gen_func_decl(&mut self, f: &FuncDecl) -> CodegenResult<()> {
        let name = self.session.lookup_str(f.name);

        self.push_line(0, format!(".globl {name}"));
        self.push_line(0, format!("{name}:"));

        // prologue
        self.push_line(1, "push %rbp");
        self.push_line(1, "mov %rsp, %rbp");

        self.locals.clear();
        self.stack_offset = 0;

        for stmt in &f.statements {
            self.gen_stmt(stmt)?;
        }

        // fallback for functions that do not end in a return statement
        self.gen_epilogue();

        Ok(())
    }

    fn gen_epilogue(&mut self) {
        self.push_line(1, "mov %rbp, %rsp");
        self.push_line(1, "pop %rbp");
        self.push_line(1, "ret");
    }

    fn gen_stmt(&mut self, stmt: &Stmt) -> CodegenResult<()> {
        match stmt {
            Stmt::Return(expr) => {
                self.gen_expr(expr)?;
                self.gen_epilogue();
            }

            Stmt::Expr(expr) => {
                self.gen_expr(expr)?;
            }

            Stmt::Declare { name, init } => {
                if let Some(init) = init {
                    self.gen_expr(init)?;
                }

                // The slot is reserved whether or not there is an
                // initializer; without one it holds whatever `%rax`
                // happened to contain.
                self.push_line(1, "push %rax");
                self.stack_offset -= 8;
                self.locals.push((*name, self.stack_offset));
            }
        }

        Ok(())
    }

    fn gen_expr(&mut self, expr: &Expr) -> CodegenResult<()> {
        match expr {
            Expr::Constant(n) => {
                self.push_line(1, format!("movl ${n}, %eax"));
            }

            Expr::Var(name) => {
                let offset = self.local_offset(*name)?;
                self.push_line(1, format!("movl {offset}(%rbp), %eax"));
            }

            Expr::Assign { name, expr } => {
                self.gen_expr(expr)?;

                // the stored value stays in `%eax` for the enclosing
                // expression
                let offset = self.local_offset(*name)?;
                self.push_line(1, format!("movl %eax, {offset}(%rbp)"));
            }

            Expr::UnOp { op, expr } => self.gen_unary_expr(*op, expr)?,

            Expr::BinOp { op, lhs, rhs } => self.gen_binary_expr(*op, lhs, rhs)?,
        }

        Ok(())
    }

    fn gen_unary_expr(&mut self, op: UnOp, operand: &Expr) -> CodegenResult<()> {
        self.gen_expr(operand)?;

        match op {
            UnOp::Negate => self.push_line(1, "neg %eax"),
            UnOp::BitwiseInvert => self.push_line(1, "not %eax"),
            UnOp::LogicalNot => {
                self.push_line(1, "cmpl $0, %eax");
                self.push_line(1, "movl $0, %eax");
                self.push_line(1, "sete %al");
            }
        }

        Ok(())
    }

    fn gen_binary_expr(&mut self, op: BinOp, lhs: &Expr, rhs: &Expr) -> CodegenResult<()> {
        match op {
            BinOp::Add => {
                self.gen_operands(lhs, rhs)?;
                self.push_line(1, "addl %ecx, %eax");
            }

            // the rhs is evaluated first so that the lhs ends up in `%eax`
            // when `subl` runs
            BinOp::Sub => {
                self.gen_expr(rhs)?;
                self.push_line(1, "push %rax");
                self.gen_expr(lhs)?;
                self.push_line(1, "pop %rcx");
                self.push_line(1, "subl %ecx, %eax");
            }

            BinOp::Mul => {
                self.gen_operands(lhs, rhs)?;
                self.push_line(1, "imul %ecx, %eax");
            }

            // `idivl` requires the dividend in `%edx:%eax`, so the divisor
            // is computed first and parked in `%ebx`
            BinOp::Div => {
                self.gen_expr(rhs)?;
                self.push_line(1, "movl %eax, %ebx");
                self.gen_expr(lhs)?;
                self.push_line(1, "xor %edx, %edx");
                self.push_line(1, "idivl %ebx");
            }

            BinOp::Mod => {
                self.gen_expr(rhs)?;
                self.push_line(1, "movl %eax, %ebx");
                self.gen_expr(lhs)?;
                self.push_line(1, "xor %edx, %edx");
                self.push_line(1, "idivl %ebx");
                self.push_line(1, "movl %edx, %eax");
            }

            BinOp::Lt => self.gen_comparison(lhs, rhs, "setl")?,
            BinOp::LtEq => self.gen_comparison(lhs, rhs, "setle")?,
            BinOp::Gt => self.gen_comparison(lhs, rhs, "setg")?,
            BinOp::GtEq => self.gen_comparison(lhs, rhs, "setge")?,
            BinOp::Equal => self.gen_comparison(lhs, rhs, "sete")?,
            BinOp::NotEqual => self.gen_comparison(lhs, rhs, "setne")?,

            BinOp::LogicalAnd => {
                let rhs_label = self.new_label();
                let end_label = self.new_label();

                self.gen_expr(lhs)?;
                self.push_line(1, "cmpl $0, %eax");
                self.push_line(1, format!("jne {rhs_label}"));
                self.push_line(1, format!("jmp {end_label}"));
                self.push_line(0, format!("{rhs_label}:"));
                self.gen_expr(rhs)?;
                self.push_line(1, "cmpl $0, %eax");
                self.push_line(1, "movl $0, %eax");
                self.push_line(1, "setne %al");
                self.push_line(0, format!("{end_label}:"));
            }

            BinOp::LogicalOr => {
                let rhs_label = self.new_label();
                let end_label = self.new_label();

                self.gen_expr(lhs)?;
                self.push_line(1, "cmpl $0, %eax");
                self.push_line(1, format!("je {rhs_label}"));
                self.push_line(1, "movl $1, %eax");
                self.push_line(1, format!("jmp {end_label}"));
                self.push_line(0, format!("{rhs_label}:"));
                self.gen_expr(rhs)?;
                self.push_line(1, "cmpl $0, %eax");
                self.push_line(1, "movl $0, %eax");
                self.push_line(1, "setne %al");
                self.push_line(0, format!("{end_label}:"));
            }

            BinOp::BitwiseAnd => {
                self.gen_operands(lhs, rhs)?;
                self.push_line(1, "and %ecx, %eax");
            }

            BinOp::BitwiseOr => {
                self.gen_operands(lhs, rhs)?;
                self.push_line(1, "or %ecx, %eax");
            }

            BinOp::BitwiseXor => {
                self.gen_operands(lhs, rhs)?;
                self.push_line(1, "xor %ecx, %eax");
            }

            BinOp::ShiftLeft => self.gen_shift(lhs, rhs, "sal")?,
            BinOp::ShiftRight => self.gen_shift(lhs, rhs, "sar")?,
        }

        Ok(())
    }

    /// Evaluates `lhs` then `rhs`, leaving the lhs in `%ecx` and the rhs
    /// in `%eax`.
    fn gen_operands(&mut self, lhs: &Expr, rhs: &Expr) -> CodegenResult<()> {
        self.gen_expr(lhs)?;
        self.push_line(1, "push %rax");
        self.gen_expr(rhs)?;
        self.push_line(1, "pop %rcx");
        Ok(())
    }

    fn gen_comparison(&mut self, lhs: &Expr, rhs: &Expr, set_instr: &str) -> CodegenResult<()> {
        self.gen_operands(lhs, rhs)?;

        self.push_line(1, "cmpl %eax, %ecx");
        self.push_line(1, "movl $0, %eax");
        self.push_line(1, format!("{set_instr} %al"));
        Ok(())
    }

    // the shift count has to be in `%cl`
    fn gen_shift(&mut self, lhs: &Expr, rhs: &Expr, instr: &str) -> CodegenResult<()> {
        self.gen_expr(rhs)?;
        self.push_line(1, "push %rax");
        self.gen_expr(lhs)?;
        self.push_line(1, "pop %rcx");
        self.push_line(1, format!("{instr} %cl, %eax"));
        Ok(())
    }

    // Labels are unique per `run`; a pair is drawn fresh for each
    // short-circuit operator and never reused.
    fn new_label(&mut self) -> String {
        let label = format!("_label{}", self.label_counter);
        self.label_counter += 1;
        label
    }

    // First match wins: a redeclared name keeps resolving to its original
    // slot. Pinned by tests; see DESIGN.md before changing.
    fn local_offset(&self, name: InternedStr) -> CodegenResult<i64> {
        self.locals
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, offset)| *offset)
            .ok_or_else(|| CodegenError::UnknownVariable(self.session.lookup_str(name)))
    }

    fn push_line(&mut self, indent: u8, s: impl AsRef<str>) {
        const INDENT: &str = "    ";

        for _ in 0..indent {
            self.output.push_str(INDENT);
        }

        self.output.push_str(s.as_ref());
        self.output.push('\n');
    }
}
