//! scc-gen - x86-64 Code Generation
//!
//! Second walk over the AST, synchronised with the scope tree the analyser
//! built. The generator keeps a current-scope pointer and a stack of
//! per-depth cursors counting how many children of the current scope have
//! been consumed. Entering a function or compound statement consumes the
//! next unconsumed child and pushes a fresh cursor; exiting pops the cursor
//! and restores the parent. Both walks visit functions and blocks in source
//! order, so the pairing is exact; any divergence surfaces as the internal
//! "scope traversal mismatch" error rather than bad code.
//!
//! Output is Intel-syntax assembly for the Linux System-V ABI. Every
//! expression leaves its result in `rax`; binary operands travel through the
//! stack and `rbx`; comparisons materialise 0 or 1 via `set<cc>`/`movzx`.
//! Control-flow labels come from one monotone counter per generation pass.

mod asm;
mod error;

pub use asm::{AsmBuffer, ARG_REGISTERS};
pub use error::{CodeGenError, Result};

use scc_par::ast::*;
use scc_sem::{ScopeId, ScopeTree};
use scc_util::FxHashSet;

/// Code generator for one program
pub struct Generator<'a> {
    /// Scope tree built by the analyser, traversed read-only
    tree: &'a ScopeTree,

    /// Scope currently in effect
    current: ScopeId,

    /// Per-depth counters of consumed child scopes
    cursors: Vec<usize>,

    /// Output buffer
    asm: AsmBuffer,

    /// Monotone counter backing label generation
    label_counter: u32,

    /// Labels emitted so far; guards pairwise uniqueness
    emitted_labels: FxHashSet<String>,
}

/// Generate assembly for `program` using its scope tree.
///
/// The tree must come from analysing the same program; the lock-step walk
/// fails with [`CodeGenError::ScopeMismatch`] otherwise.
pub fn generate(program: &Program, tree: &ScopeTree) -> Result<String> {
    Generator::new(tree).run(program)
}

impl<'a> Generator<'a> {
    /// Create a generator positioned at the root scope
    pub fn new(tree: &'a ScopeTree) -> Self {
        Self {
            tree,
            current: tree.root(),
            cursors: Vec::new(),
            asm: AsmBuffer::new(),
            label_counter: 0,
            emitted_labels: FxHashSet::default(),
        }
    }

    fn run(mut self, program: &Program) -> Result<String> {
        self.emit_prelude();

        self.cursors.push(0);
        for function in &program.functions {
            self.visit_function(function)?;
        }
        self.cursors.pop();

        Ok(self.asm.finish())
    }

    /// Program prologue: `_start` calls `main` and exits with its result.
    fn emit_prelude(&mut self) {
        self.asm.directive(".intel_syntax noprefix");
        self.asm.directive(".section .text");
        self.asm.ins(".globl _start");
        self.asm.blank();
        self.emit_label("_start");
        self.asm.ins("call main");
        self.asm.ins("mov rdi, rax");
        self.asm.ins("mov rax, 60");
        self.asm.ins("syscall");
        self.asm.blank();
    }

    /// Consume the next unconsumed child of the current scope.
    fn enter_child(&mut self) -> Result<()> {
        let cursor = self.cursors.last_mut().ok_or(CodeGenError::ScopeMismatch)?;
        let child = self
            .tree
            .child(self.current, *cursor)
            .ok_or(CodeGenError::ScopeMismatch)?;
        *cursor += 1;
        self.current = child;
        Ok(())
    }

    /// Return to the parent scope.
    fn exit_scope(&mut self) {
        self.current = self.tree.parent(self.current).unwrap_or(self.current);
    }

    fn visit_function(&mut self, function: &Function) -> Result<()> {
        self.enter_child()?;

        let name = function.name.as_str();
        self.asm.directive(&format!(".globl {}", name));
        self.emit_label(name);

        self.asm.ins("push rbp");
        self.asm.ins("mov rbp, rsp");

        // Parameter slots live in the function scope itself
        let frame_size = self.tree.frame_size(self.current);
        if frame_size > 0 {
            self.asm.ins(format!("sub rsp, {}", frame_size));
        }

        for (index, param) in function.params.iter().enumerate() {
            let offset = self
                .tree
                .offset_of(self.current, param.name)
                .ok_or(CodeGenError::UnresolvedVariable(param.name))?;
            self.asm
                .ins(format!("mov [rbp - {}], {}", offset, ARG_REGISTERS[index]));
        }

        self.cursors.push(0);
        self.visit_compound(&function.body)?;
        self.cursors.pop();

        self.exit_scope();
        self.asm.blank();
        Ok(())
    }

    fn visit_compound(&mut self, block: &Block) -> Result<()> {
        self.enter_child()?;
        self.cursors.push(0);

        let frame_size = self.tree.frame_size(self.current);
        if frame_size > 0 {
            self.asm.ins(format!("sub rsp, {}", frame_size));
        }

        for stmt in &block.stmts {
            self.visit_statement(stmt)?;
        }

        self.cursors.pop();
        self.exit_scope();
        Ok(())
    }

    fn visit_statement(&mut self, stmt: &Stmt) -> Result<()> {
        match stmt {
            Stmt::Empty => Ok(()),
            Stmt::Return(ret) => self.visit_return(ret),
            Stmt::VarDecl(decl) => self.visit_var_decl(decl),
            Stmt::Assign(assign) => self.visit_assignment(assign),
            Stmt::If(if_stmt) => self.visit_if(if_stmt),
            Stmt::While(while_stmt) => self.visit_while(while_stmt),
        }
    }

    fn visit_return(&mut self, ret: &ReturnStmt) -> Result<()> {
        match &ret.value {
            Some(value) => self.visit_expression(value)?,
            None => self.asm.ins("mov rax, 0"),
        }
        self.asm.ins("leave");
        self.asm.ins("ret");
        Ok(())
    }

    fn visit_var_decl(&mut self, decl: &VarDeclStmt) -> Result<()> {
        // Declarations bind in the current scope; shadowed ancestors must
        // not be picked up here, so the lookup is scope-local.
        let offset = self
            .tree
            .offset_of(self.current, decl.name)
            .ok_or(CodeGenError::UnresolvedVariable(decl.name))?;

        match &decl.init {
            Some(init) => {
                self.visit_expression(init)?;
                self.asm.ins(format!("mov [rbp - {}], rax", offset));
            },
            None => {
                self.asm
                    .ins(format!("mov qword ptr [rbp - {}], 0", offset));
            },
        }
        Ok(())
    }

    fn visit_assignment(&mut self, assign: &AssignStmt) -> Result<()> {
        let offset = self
            .tree
            .resolve(self.current, assign.name)
            .ok_or(CodeGenError::UnresolvedVariable(assign.name))?;

        self.visit_expression(&assign.value)?;
        self.asm.ins(format!("mov [rbp - {}], rax", offset));
        Ok(())
    }

    fn visit_if(&mut self, if_stmt: &IfStmt) -> Result<()> {
        let else_label = self.next_label("else");
        let end_label = self.next_label("end");

        self.visit_expression(&if_stmt.cond)?;
        self.asm.ins("test rax, rax");
        self.asm.ins(format!("jz {}", else_label));

        self.visit_compound(&if_stmt.then_block)?;
        self.asm.ins(format!("jmp {}", end_label));

        self.emit_label(&else_label);
        if let Some(else_block) = &if_stmt.else_block {
            self.visit_compound(else_block)?;
        }
        self.emit_label(&end_label);
        Ok(())
    }

    fn visit_while(&mut self, while_stmt: &WhileStmt) -> Result<()> {
        let start_label = self.next_label("while_start");
        let end_label = self.next_label("while_end");

        self.emit_label(&start_label);
        self.visit_expression(&while_stmt.cond)?;
        self.asm.ins("test rax, rax");
        self.asm.ins(format!("jz {}", end_label));

        self.visit_compound(&while_stmt.body)?;

        self.asm.ins(format!("jmp {}", start_label));
        self.emit_label(&end_label);
        Ok(())
    }

    /// Lower an expression; the result is always left in `rax`.
    fn visit_expression(&mut self, expr: &Expr) -> Result<()> {
        match expr {
            Expr::Literal(value) => {
                self.asm.ins(format!("mov rax, {}", value));
                Ok(())
            },
            Expr::Var(var) => {
                let offset = self
                    .tree
                    .resolve(self.current, var.name)
                    .ok_or(CodeGenError::UnresolvedVariable(var.name))?;
                self.asm.ins(format!("mov rax, [rbp - {}]", offset));
                Ok(())
            },
            Expr::Grouped(inner) => self.visit_expression(inner),
            Expr::Binary(bin) => self.visit_binary(bin),
            Expr::Comparison(cmp) => self.visit_comparison(cmp),
            Expr::Call(call) => self.visit_call(call),
        }
    }

    fn visit_binary(&mut self, bin: &BinaryExpr) -> Result<()> {
        self.visit_expression(&bin.left)?;
        self.asm.ins("push rax");

        self.visit_expression(&bin.right)?;
        self.asm.ins("mov rbx, rax");
        self.asm.ins("pop rax");

        match bin.op {
            BinOp::Add => self.asm.ins("add rax, rbx"),
            BinOp::Sub => self.asm.ins("sub rax, rbx"),
            BinOp::Mul => self.asm.ins("imul rax, rbx"),
            BinOp::Div => {
                self.asm.ins("cqo");
                self.asm.ins("idiv rbx");
            },
        }
        Ok(())
    }

    fn visit_comparison(&mut self, cmp: &ComparisonExpr) -> Result<()> {
        self.visit_expression(&cmp.left)?;
        self.asm.ins("push rax");

        self.visit_expression(&cmp.right)?;
        self.asm.ins("mov rbx, rax");
        self.asm.ins("pop rax");

        self.asm.ins("cmp rax, rbx");
        let set = match cmp.op {
            CmpOp::Eq => "sete al",
            CmpOp::Ne => "setne al",
            CmpOp::Lt => "setl al",
            CmpOp::Le => "setle al",
            CmpOp::Gt => "setg al",
            CmpOp::Ge => "setge al",
        };
        self.asm.ins(set);

        // Widen the flag byte to the full register
        self.asm.ins("movzx rax, al");
        Ok(())
    }

    fn visit_call(&mut self, call: &CallExpr) -> Result<()> {
        // Evaluate arguments left to right onto the stack, then pop into the
        // argument registers in reverse; a call inside an argument can then
        // never clobber an earlier argument register.
        for arg in &call.args {
            self.visit_expression(arg)?;
            self.asm.ins("push rax");
        }

        for index in (0..call.args.len()).rev() {
            self.asm.ins(format!("pop {}", ARG_REGISTERS[index]));
        }

        self.asm.ins(format!("call {}", call.name));
        Ok(())
    }

    /// Produce a fresh label from the pass-wide counter.
    fn next_label(&mut self, stem: &str) -> String {
        let label = format!("{}_{}", stem, self.label_counter);
        self.label_counter += 1;
        label
    }

    /// Emit a label definition, guarding pairwise uniqueness.
    fn emit_label(&mut self, name: &str) {
        let fresh = self.emitted_labels.insert(name.to_string());
        debug_assert!(fresh, "duplicate label '{}'", name);
        self.asm.label(name);
    }
}
