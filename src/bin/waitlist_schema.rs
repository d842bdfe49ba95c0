//! Prints the SQL that provisions the waitlist table, its indexes and policies.
//!
//! Pipe it into `psql "$DATABASE_URL"` or paste it into the SQL editor.

use std::io::{self, Write};

use waitlist::domain::schema::PROVISIONING_SQL;

fn main() -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", PROVISIONING_SQL.trim())
}
