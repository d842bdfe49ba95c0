//! SQL for provisioning the `waitlist` table.
//!
//! The service never runs these statements. `CREATE_TABLE_SQL` is returned to
//! operators when an insert finds the table missing, and `PROVISIONING_SQL` is
//! printed by the `waitlist-schema` binary.

pub const WAITLIST_TABLE: &str = "waitlist";

pub const CREATE_TABLE_SQL: &str = r#"CREATE TABLE waitlist (
  id SERIAL PRIMARY KEY,
  name TEXT NOT NULL,
  email TEXT NOT NULL UNIQUE,
  user_type TEXT NOT NULL,
  agreed_to_terms BOOLEAN NOT NULL DEFAULT TRUE,
  created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);"#;

/// Full setup: table, indexes, uniqueness constraint and row-level security.
///
/// The policies target the `anon` and `authenticated` roles of the hosted
/// Postgres provider; plain Postgres installs need those roles created first.
pub const PROVISIONING_SQL: &str = r#"-- Create the waitlist table
CREATE TABLE IF NOT EXISTS waitlist (
  id SERIAL PRIMARY KEY,
  name TEXT NOT NULL,
  email TEXT NOT NULL,
  user_type TEXT NOT NULL,
  agreed_to_terms BOOLEAN NOT NULL DEFAULT TRUE,
  created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

-- Lookup indexes
CREATE INDEX IF NOT EXISTS waitlist_email_idx ON waitlist (email);
CREATE INDEX IF NOT EXISTS waitlist_user_type_idx ON waitlist (user_type);
CREATE INDEX IF NOT EXISTS waitlist_created_at_idx ON waitlist (created_at);

-- One signup per email
ALTER TABLE waitlist ADD CONSTRAINT waitlist_email_unique UNIQUE (email);

-- Row level security: anyone may sign up, only authenticated users may read
ALTER TABLE waitlist ENABLE ROW LEVEL SECURITY;
CREATE POLICY insert_policy ON waitlist FOR INSERT TO anon WITH CHECK (true);
CREATE POLICY select_policy ON waitlist FOR SELECT TO authenticated USING (true);
"#;
