//! Audit log command

use crate::error::SpendVistaResult;
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
pub fn handle_audit_command(storage: &Storage, limit: usize) -> SpendVistaResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("Audit log is empty.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry);
    }
    println!();
    println!(
        "Showing {} entries from {}",
        entries.len(),
        storage.audit().path().display()
    );

    Ok(())
}
