//! Assembly text emission.
//!
//! A thin buffer over `String`: instructions are indented four spaces,
//! labels and directives sit flush left. All output is Intel syntax.

/// System-V AMD64 integer argument registers, in call order
pub const ARG_REGISTERS: [&str; 6] = ["rdi", "rsi", "rdx", "rcx", "r8", "r9"];

/// Accumulates the assembly text for one generation pass
pub struct AsmBuffer {
    output: String,
}

impl AsmBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    /// Emit a directive or other flush-left line
    pub fn directive(&mut self, text: &str) {
        self.output.push_str(text);
        self.output.push('\n');
    }

    /// Emit an instruction, indented
    pub fn ins(&mut self, text: impl AsRef<str>) {
        self.output.push_str("    ");
        self.output.push_str(text.as_ref());
        self.output.push('\n');
    }

    /// Emit a label definition
    pub fn label(&mut self, name: &str) {
        self.output.push_str(name);
        self.output.push_str(":\n");
    }

    /// Emit a blank line
    pub fn blank(&mut self) {
        self.output.push('\n');
    }

    /// Borrow the text emitted so far
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Consume the buffer, yielding the final text
    pub fn finish(self) -> String {
        self.output
    }
}

impl Default for AsmBuffer {
    fn default() -> Self {
        Self::new()
    }
}
