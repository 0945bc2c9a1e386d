// paygtoken/src/protocol/catalog.rs

use crate::types::Opcode;
use crate::{Error, Result};

/// Commands understood by deployed controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    UnlockAbsolute,
    Lock,
    UnlockRelative,
    DemoMode,
    UnlockForever,
    Calibrate,
    CounterSync,
    Misc,
}

/// How the payload string of a command is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadRule {
    /// Any integer that fits the 32-bit record field.
    Integer,
    /// Empty, or an integer equal to zero.
    MustBeZero,
    /// Normally absent; an explicit zero is tolerated.
    MustBeAbsent,
}

/// One catalog row. Rows are `'static` and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDefinition {
    pub kind: CommandKind,
    pub name: &'static str,
    pub opcode: Opcode,
    pub rule: PayloadRule,
    pub fixed_payload: Option<u32>,
}

const fn def(
    kind: CommandKind,
    name: &'static str,
    opcode: u32,
    rule: PayloadRule,
    fixed_payload: Option<u32>,
) -> CommandDefinition {
    CommandDefinition {
        kind,
        name,
        opcode: Opcode::new(opcode),
        rule,
        fixed_payload,
    }
}

// `lock` shares opcode 0 with `unlock_absolute`: a lock token is an
// absolute unlock to day zero on the wire.
static CATALOG: [CommandDefinition; 8] = [
    def(CommandKind::UnlockAbsolute, "unlock_absolute", 0, PayloadRule::Integer, None),
    def(CommandKind::Lock, "lock", 0, PayloadRule::MustBeZero, Some(0)),
    def(CommandKind::UnlockRelative, "unlock_relative", 1, PayloadRule::Integer, None),
    def(CommandKind::DemoMode, "demo_mode", 2, PayloadRule::Integer, Some(0)),
    def(CommandKind::UnlockForever, "unlock_forever", 7, PayloadRule::MustBeAbsent, None),
    def(CommandKind::Calibrate, "calibrate", 8, PayloadRule::Integer, None),
    def(CommandKind::CounterSync, "counter_sync", 9, PayloadRule::Integer, None),
    def(CommandKind::Misc, "misc", 10, PayloadRule::Integer, None),
];

/// Alternative spellings accepted by `lookup`.
static ALIASES: [(&str, CommandKind); 1] = [("unlock_relative_days", CommandKind::UnlockRelative)];

impl CommandKind {
    pub fn definition(&self) -> &'static CommandDefinition {
        // CATALOG rows are in this order
        let row = match self {
            CommandKind::UnlockAbsolute => 0,
            CommandKind::Lock => 1,
            CommandKind::UnlockRelative => 2,
            CommandKind::DemoMode => 3,
            CommandKind::UnlockForever => 4,
            CommandKind::Calibrate => 5,
            CommandKind::CounterSync => 6,
            CommandKind::Misc => 7,
        };
        &CATALOG[row]
    }

    pub fn name(&self) -> &'static str {
        self.definition().name
    }
}

/// Every catalog row, in opcode order.
pub fn all() -> &'static [CommandDefinition] {
    &CATALOG
}

/// Find a command by name (case-insensitive, surrounding whitespace ignored).
pub fn lookup(name: &str) -> Result<&'static CommandDefinition> {
    let wanted = name.trim();
    if let Some(d) = CATALOG.iter().find(|d| d.name.eq_ignore_ascii_case(wanted)) {
        return Ok(d);
    }
    ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(wanted))
        .map(|(_, kind)| kind.definition())
        .ok_or_else(|| Error::UnsupportedCommand(name.to_string()))
}
