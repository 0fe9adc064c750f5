//! Commands of the two cracking tools: SScrack (`porthack`) and FTpea
//! (`overflow`).

use coal_content::ContentKey;
use coal_types::error::Result;

use crate::narrative::NarrativeContext;
use crate::script::{FTP_OVERFLOW, SSH_ATTACK, Script};
use crate::shell::{Command, Environment, Shell, Transition};
use crate::vault::{Attempt, AuthError, Field, Gate};

/// SScrack fallback message.
pub const SSCRACK_FALLBACK: &str =
    "That is not a valid SScrack command. Type help to view valid commands";

/// FTpea fallback message.
pub const FTPEA_FALLBACK: &str =
    "root ~ FTpea > That was not a valid FTpea command, type help for a list of commands";

// ---------------------------------------------------------------------------
// Shared pieces
// ---------------------------------------------------------------------------

/// Tool-specific wording of a cracking command.
struct Tool {
    prefix: &'static str,
    gate: Gate,
    ask_ip: &'static str,
    ask_mac: &'static str,
    ask_port: &'static str,
    script: Script,
    help: ContentKey,
    reject: fn(Field, &str) -> String,
}

const SSCRACK: Tool = Tool {
    prefix: "root ~ SScrack > ",
    gate: Gate::Ssh,
    ask_ip: "root ~ SScrack > Enter IP Address : ",
    ask_mac: "root ~ SScrack > Enter a valid MAC Address : ",
    ask_port: "root ~ SScrack > Enter a valid Port Number : ",
    script: SSH_ATTACK,
    help: ContentKey::SsCrackHelp,
    reject: sscrack_rejection,
};

const FTPEA: Tool = Tool {
    prefix: "root ~ FTpea > ",
    gate: Gate::Ftp,
    ask_ip: "root ~ FTpea > Enter IP Address : ",
    ask_mac: "root ~ FTpea > Enter a valid MAC Address : ",
    ask_port: "root ~ FTpea > Enter a valid port : ",
    script: FTP_OVERFLOW,
    help: ContentKey::FtPeaHelp,
    reject: ftpea_rejection,
};

fn sscrack_rejection(field: Field, supplied: &str) -> String {
    let label = match field {
        Field::Mac => "PortMAC",
        Field::Port => "Portnumber",
        _ => "PortIP",
    };
    format!(
        "{}{label}  {supplied}  is invalid, is protected against this attack, or already open...",
        SSCRACK.prefix
    )
}

fn ftpea_rejection(field: Field, supplied: &str) -> String {
    let label = match field {
        Field::Mac => "The MAC Address,",
        Field::Port => "The port number,",
        _ => "The IP Address,",
    };
    format!(
        "{}{label}  {supplied}  is invalid, is protected against this attack, or already open...",
        FTPEA.prefix
    )
}

/// Gather IP, MAC and port, authenticate, then run the tool's narrative or
/// report the rejected field.
fn crack(tool: &Tool, env: &mut Environment<'_>) -> Result<Transition> {
    env.blank()?;
    let ip = env.ask(tool.ask_ip)?;
    let mac = env.ask(tool.ask_mac)?;
    let port = env.ask(tool.ask_port)?;
    let attempt = Attempt::triple(ip, mac, port);
    match env.vault.authenticate(tool.gate, &attempt, env.policy) {
        Ok(record) => {
            let mut ctx = NarrativeContext::new(&attempt.primary, &attempt.secondary);
            ctx.secret = record.reveals.map(str::to_string);
            env.narrate(&tool.script, &ctx)?;
        },
        Err(AuthError::Rejected { field, supplied }) => {
            env.blank()?;
            env.say(&(tool.reject)(field, &supplied))?;
            env.blank()?;
        },
    }
    Ok(Transition::Stay)
}

fn help(tool: &Tool, env: &mut Environment<'_>) -> Result<Transition> {
    env.blank()?;
    env.render(tool.help)?;
    env.blank()?;
    Ok(Transition::Stay)
}

fn exit(env: &mut Environment<'_>) -> Result<Transition> {
    env.blank()?;
    env.blank()?;
    Ok(Transition::Leave)
}

// ---------------------------------------------------------------------------
// SScrack
// ---------------------------------------------------------------------------

struct SsHelpCmd;
impl Command for SsHelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn execute(&self, env: &mut Environment<'_>) -> Result<Transition> {
        help(&SSCRACK, env)
    }
}

struct SsExitCmd;
impl Command for SsExitCmd {
    fn name(&self) -> &str {
        "exit"
    }
    fn execute(&self, env: &mut Environment<'_>) -> Result<Transition> {
        exit(env)
    }
}

struct PorthackCmd;
impl Command for PorthackCmd {
    fn name(&self) -> &str {
        "porthack"
    }
    fn claims_fallback(&self) -> bool {
        true
    }
    fn execute(&self, env: &mut Environment<'_>) -> Result<Transition> {
        crack(&SSCRACK, env)
    }
}

/// Register the SScrack commands in dispatch order.
pub fn register_sscrack_commands(shell: &mut Shell) {
    shell.register(Box::new(SsHelpCmd));
    shell.register(Box::new(SsExitCmd));
    shell.register(Box::new(PorthackCmd));
}

pub fn sscrack_shell() -> Shell {
    let mut shell = Shell::new(SSCRACK_FALLBACK);
    register_sscrack_commands(&mut shell);
    shell
}

// ---------------------------------------------------------------------------
// FTpea
// ---------------------------------------------------------------------------

struct FtExitCmd;
impl Command for FtExitCmd {
    fn name(&self) -> &str {
        "exit"
    }
    fn execute(&self, env: &mut Environment<'_>) -> Result<Transition> {
        exit(env)
    }
}

struct FtHelpCmd;
impl Command for FtHelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn execute(&self, env: &mut Environment<'_>) -> Result<Transition> {
        help(&FTPEA, env)
    }
}

struct OverflowCmd;
impl Command for OverflowCmd {
    fn name(&self) -> &str {
        "overflow"
    }
    fn claims_fallback(&self) -> bool {
        true
    }
    fn execute(&self, env: &mut Environment<'_>) -> Result<Transition> {
        crack(&FTPEA, env)
    }
}

/// Register the FTpea commands in dispatch order.
pub fn register_ftpea_commands(shell: &mut Shell) {
    shell.register(Box::new(FtExitCmd));
    shell.register(Box::new(FtHelpCmd));
    shell.register(Box::new(OverflowCmd));
}

pub fn ftpea_shell() -> Shell {
    let mut shell = Shell::new(FTPEA_FALLBACK);
    register_ftpea_commands(&mut shell);
    shell
}
