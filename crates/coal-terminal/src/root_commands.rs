//! Root shell commands: clear, restart, help, iwlist, aireplay, aircon,
//! ftpea, logout, news, cal, nmap, sscrack.

use rand::seq::SliceRandom;

use coal_audio::{Cue, Playback};
use coal_content::ContentKey;
use coal_types::error::{CoalError, Result};

use crate::device_commands::print_banner;
use crate::narrative::NarrativeContext;
use crate::script::WIRELESS_CRACK;
use crate::shell::{Command, Environment, Shell, ShellId, Transition, normalize};
use crate::vault::{Attempt, AuthError, Field, Gate};

/// Root shell fallback message.
pub const ROOT_FALLBACK: &str = "Command invalid. Type 'help' for a list of commands...";

const ASK_IP: &str = "root ~ Enter IP Address : ";

// ---------------------------------------------------------------------------
// clear / restart / help
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn execute(&self, env: &mut Environment<'_>) -> Result<Transition> {
        env.clear()?;
        Ok(Transition::Stay)
    }
}

struct RestartCmd;
impl Command for RestartCmd {
    fn name(&self) -> &str {
        "restart"
    }
    fn execute(&self, env: &mut Environment<'_>) -> Result<Transition> {
        env.clear()?;
        env.pause_ms(1500);
        Ok(Transition::Restart)
    }
}

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn execute(&self, env: &mut Environment<'_>) -> Result<Transition> {
        env.blank()?;
        env.render(ContentKey::RootHelp)?;
        env.blank()?;
        Ok(Transition::Stay)
    }
}

// ---------------------------------------------------------------------------
// iwlist / aireplay / aircon
// ---------------------------------------------------------------------------

struct IwlistCmd;
impl Command for IwlistCmd {
    fn name(&self) -> &str {
        "iwlist"
    }
    fn execute(&self, env: &mut Environment<'_>) -> Result<Transition> {
        env.blank()?;
        env.say("Scanning...")?;
        env.pause_ms(2500);
        env.say("7 wireless connections found...")?;
        env.pause_ms(600);
        env.blank()?;
        env.render(ContentKey::WirelessList)?;
        env.blank()?;
        env.blank()?;
        Ok(Transition::Stay)
    }
}

struct AireplayCmd;
impl Command for AireplayCmd {
    fn name(&self) -> &str {
        "aireplay"
    }
    fn execute(&self, env: &mut Environment<'_>) -> Result<Transition> {
        env.blank()?;
        let ip = env.ask(ASK_IP)?;
        let essid = env.ask("root ~ Enter Essid : ")?;
        let attempt = Attempt::pair(ip, essid);
        match env.vault.authenticate(Gate::Wireless, &attempt, env.policy) {
            Ok(record) => {
                let mut ctx = NarrativeContext::new(&attempt.primary, &attempt.secondary);
                ctx.secret = record.reveals.map(str::to_string);
                env.narrate(&WIRELESS_CRACK, &ctx)?;
            },
            Err(AuthError::Rejected { field, supplied }) => {
                let message = match field {
                    Field::Essid => format!("Essid  {supplied}  not found..."),
                    _ => format!("IP address  {supplied}  not found..."),
                };
                env.blank()?;
                env.say(&message)?;
                env.blank()?;
            },
        }
        Ok(Transition::Stay)
    }
}

struct AirconCmd;
impl Command for AirconCmd {
    fn name(&self) -> &str {
        "aircon"
    }
    fn execute(&self, env: &mut Environment<'_>) -> Result<Transition> {
        env.blank()?;
        let ip = env.ask(ASK_IP)?;
        let password = env.ask("root ~ Enter Password : ")?;
        let attempt = Attempt::pair(ip, password);
        match env.vault.authenticate(Gate::Login, &attempt, env.policy) {
            Ok(record) => {
                let device = env.vault.device(record.device).ok_or_else(|| {
                    CoalError::Shell(format!("no device behind {}", record.device))
                })?;
                env.blank()?;
                env.say("Attempting login...")?;
                env.cue(Cue::Modem, Playback::Blocking);
                env.cue(Cue::Idle, Playback::Loop);
                env.blank()?;
                env.say("Login successful!")?;
                env.blank()?;
                print_banner(env, device)?;
                log::info!("Logged in to {} ({})", device.name, device.id);
                Ok(Transition::Enter(ShellId::Device(device.id)))
            },
            Err(AuthError::Rejected { field, supplied }) => {
                let message = match field {
                    Field::Password => format!("Password, {supplied} is invalid..."),
                    _ => format!("IP address, {supplied} is invalid..."),
                };
                env.blank()?;
                env.say(&message)?;
                env.blank()?;
                Ok(Transition::Stay)
            },
        }
    }
}

// ---------------------------------------------------------------------------
// ftpea / sscrack
// ---------------------------------------------------------------------------

struct FtpeaCmd;
impl Command for FtpeaCmd {
    fn name(&self) -> &str {
        "ftpea"
    }
    fn execute(&self, env: &mut Environment<'_>) -> Result<Transition> {
        env.blank()?;
        env.render(ContentKey::FtPeaBanner)?;
        env.blank()?;
        env.blank()?;
        Ok(Transition::Enter(ShellId::FtPea))
    }
}

struct SscrackCmd;
impl Command for SscrackCmd {
    fn name(&self) -> &str {
        "sscrack"
    }
    fn claims_fallback(&self) -> bool {
        true
    }
    fn execute(&self, env: &mut Environment<'_>) -> Result<Transition> {
        env.blank()?;
        env.render(ContentKey::SsCrackBanner)?;
        env.blank()?;
        env.blank()?;
        Ok(Transition::Enter(ShellId::SsCrack))
    }
}

// ---------------------------------------------------------------------------
// logout
// ---------------------------------------------------------------------------

struct LogoutCmd;
impl Command for LogoutCmd {
    fn name(&self) -> &str {
        "logout"
    }
    fn execute(&self, env: &mut Environment<'_>) -> Result<Transition> {
        env.blank()?;
        env.say("Are you sure?  Y/n")?;
        env.blank()?;
        let answer = normalize(&env.ask("> ")?);
        if answer == "y" {
            env.blank()?;
            env.say("Goodbye...")?;
            env.cue(Cue::Shutdown, Playback::Blocking);
            env.blank()?;
            return Ok(Transition::Exit);
        }
        if answer == "n" {
            env.blank()?;
        }
        Ok(Transition::Stay)
    }
}

// ---------------------------------------------------------------------------
// news / cal
// ---------------------------------------------------------------------------

struct NewsCmd;
impl Command for NewsCmd {
    fn name(&self) -> &str {
        "news"
    }
    fn execute(&self, env: &mut Environment<'_>) -> Result<Transition> {
        let headlines = env.content.lines(ContentKey::Headlines)?;
        let headline = headlines
            .choose(&mut rand::thread_rng())
            .ok_or_else(|| CoalError::Content(format!("{} is empty", ContentKey::Headlines)))?;
        env.blank()?;
        env.say(headline)?;
        env.blank()?;
        Ok(Transition::Stay)
    }
}

struct CalCmd;
impl Command for CalCmd {
    fn name(&self) -> &str {
        "cal"
    }
    fn execute(&self, env: &mut Environment<'_>) -> Result<Transition> {
        let now = env.time.now()?;
        env.blank()?;
        env.say(&now.calendar())?;
        env.blank()?;
        Ok(Transition::Stay)
    }
}

// ---------------------------------------------------------------------------
// nmap
// ---------------------------------------------------------------------------

struct NmapCmd;
impl Command for NmapCmd {
    fn name(&self) -> &str {
        "nmap"
    }
    fn execute(&self, env: &mut Environment<'_>) -> Result<Transition> {
        env.blank()?;
        env.render(ContentKey::NmapBanner)?;
        env.blank()?;
        env.blank()?;
        let ip = env.ask(ASK_IP)?;
        env.blank()?;
        env.say("Scanning...")?;
        env.pause_ms(1300);
        env.blank()?;
        match env.vault.scan_for(&ip) {
            Some(scan) => {
                env.render(scan)?;
                env.blank()?;
            },
            None => env.say(&format!("IP Address  {ip}  not found..."))?,
        }
        env.blank()?;
        Ok(Transition::Stay)
    }
}

/// Register the root shell commands in dispatch order.
pub fn register_root_commands(shell: &mut Shell) {
    shell.register(Box::new(ClearCmd));
    shell.register(Box::new(RestartCmd));
    shell.register(Box::new(HelpCmd));
    shell.register(Box::new(IwlistCmd));
    shell.register(Box::new(AireplayCmd));
    shell.register(Box::new(AirconCmd));
    shell.register(Box::new(FtpeaCmd));
    shell.register(Box::new(LogoutCmd));
    shell.register(Box::new(NewsCmd));
    shell.register(Box::new(CalCmd));
    shell.register(Box::new(NmapCmd));
    shell.register(Box::new(SscrackCmd));
}

/// The root shell.
pub fn root_shell() -> Shell {
    let mut shell = Shell::new(ROOT_FALLBACK);
    register_root_commands(&mut shell);
    shell
}
