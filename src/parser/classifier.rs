//! Statement classification by required-keyword containment

/// A DDL command the parser understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DdlCommand {
    CreateTable,
    CreateIndex,
    CreateFunction,
}

impl DdlCommand {
    /// The SQL command text, for diagnostics.
    pub fn as_sql(&self) -> &'static str {
        match self {
            DdlCommand::CreateTable => "CREATE TABLE",
            DdlCommand::CreateIndex => "CREATE INDEX",
            DdlCommand::CreateFunction => "CREATE FUNCTION",
        }
    }
}

/// A registered command: every keyword must be present for a normalized
/// statement to classify as this command.
#[derive(Debug, Clone)]
pub struct CommandDef {
    pub command: DdlCommand,
    pub keywords: &'static [&'static str],
}

/// Immutable registry of recognized commands, checked in registration order.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<CommandDef>,
}

impl CommandRegistry {
    /// The standard MySQL DDL registry: CREATE TABLE, CREATE INDEX and
    /// CREATE FUNCTION, in that order.
    pub fn standard() -> Self {
        Self {
            commands: vec![
                CommandDef {
                    command: DdlCommand::CreateTable,
                    keywords: &["CREATE", "TABLE"],
                },
                CommandDef {
                    command: DdlCommand::CreateIndex,
                    keywords: &["CREATE", "INDEX"],
                },
                CommandDef {
                    command: DdlCommand::CreateFunction,
                    keywords: &["CREATE", "FUNCTION"],
                },
            ],
        }
    }

    /// Classify a normalized statement.
    ///
    /// Returns the first registered command whose every keyword occurs as a
    /// case-sensitive substring of the statement, in any order. Keywords are
    /// not word-bounded, so an identifier containing keyword text (say a
    /// table named `MY_TABLE` inside a CREATE INDEX statement) can
    /// misclassify; the extractor for the falsely matched command then
    /// rejects the statement.
    pub fn classify(&self, statement: &str) -> Option<DdlCommand> {
        self.commands
            .iter()
            .find(|def| def.keywords.iter().all(|keyword| statement.contains(*keyword)))
            .map(|def| def.command)
    }
}
