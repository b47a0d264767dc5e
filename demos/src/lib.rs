//! QCE Demo Suite
//!
//! Small circuits that exercise the simulator end to end:
//!
//! - **Bell pair**: H followed by CNOT on two qubits
//! - **GHZ state**: a Bell pair extended by a CNOT chain

use console::style;
use qce_ir::{IrResult, QubitId};
use qce_sim::{Counts, QubitRegister};

/// Build the Bell-pair circuit `(|00⟩ + |11⟩)/√2`.
pub fn bell_register() -> IrResult<QubitRegister> {
    ghz_register(2)
}

/// Build an `n`-qubit GHZ circuit `(|0…0⟩ + |1…1⟩)/√2`.
pub fn ghz_register(num_qubits: u32) -> IrResult<QubitRegister> {
    let mut reg = QubitRegister::new(num_qubits as usize);
    reg.h(QubitId(0))?;
    for q in 1..num_qubits {
        reg.cnot(QubitId(q - 1), QubitId(q))?;
    }
    Ok(reg)
}

const RULE_WIDTH: usize = 48;

/// Print the banner for a circuit run.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style(format!("QCE :: {title}")).cyan().bold());
    println!("{}", style("=".repeat(RULE_WIDTH)).cyan());
}

/// Print a subheading within a run.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("[{title}]")).yellow());
}

/// Print one labelled value, label padded to a fixed column.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {:<10} {}", style(label).dim(), value);
}

/// Print a histogram of measurement counts, one bar per outcome.
pub fn print_counts(counts: &Counts) {
    let total = counts.total().max(1);
    for (bitstring, count) in counts.sorted() {
        let width = (count * RULE_WIDTH as u64 / total) as usize;
        println!(
            "  |{bitstring}⟩ {:>6} {}",
            count,
            style("█".repeat(width)).magenta()
        );
    }
}
