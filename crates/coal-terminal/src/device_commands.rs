//! Remote device shell commands: exit, help, list, clear, snake.

use coal_content::ContentKey;
use coal_types::error::Result;

use crate::shell::{Command, Environment, Shell, Transition};
use crate::vault::Device;

/// Device shell fallback message.
pub const DEVICE_FALLBACK: &str = "Invalid remote command, type 'help' for a list of commands...";

const RULE: &str = "-----------------------------------------------------------";

/// Print the connection banner for `device`.
pub fn print_banner(env: &mut Environment<'_>, device: &Device) -> Result<()> {
    env.blank()?;
    env.say(RULE)?;
    env.say(&format!(
        "  Device IP : {} | Device Name : {}",
        device.id.ip(),
        device.name
    ))?;
    env.say(RULE)
}

struct ExitCmd;
impl Command for ExitCmd {
    fn name(&self) -> &str {
        "exit"
    }
    fn execute(&self, env: &mut Environment<'_>) -> Result<Transition> {
        let device = env.device()?;
        env.blank()?;
        env.say(&format!("Disconnecting from  {}  ...", device.id.ip()))?;
        env.pause_ms(2000);
        env.blank()?;
        log::info!("Disconnected from {}", device.name);
        Ok(Transition::Leave)
    }
}

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn execute(&self, env: &mut Environment<'_>) -> Result<Transition> {
        env.blank()?;
        env.render(ContentKey::DeviceHelp)?;
        env.blank()?;
        Ok(Transition::Stay)
    }
}

struct ListCmd;
impl Command for ListCmd {
    fn name(&self) -> &str {
        "list"
    }
    fn execute(&self, env: &mut Environment<'_>) -> Result<Transition> {
        let device = env.device()?;
        env.blank()?;
        env.render(device.listing)?;
        env.blank()?;
        env.blank()?;
        Ok(Transition::Stay)
    }
}

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn execute(&self, env: &mut Environment<'_>) -> Result<Transition> {
        let device = env.device()?;
        env.clear()?;
        print_banner(env, device)?;
        Ok(Transition::Stay)
    }
}

/// Runs the arcade game. Only the arcade device has it; elsewhere the
/// command is treated as invalid.
struct SnakeCmd;
impl Command for SnakeCmd {
    fn name(&self) -> &str {
        "snake"
    }
    fn claims_fallback(&self) -> bool {
        true
    }
    fn execute(&self, env: &mut Environment<'_>) -> Result<Transition> {
        let device = env.device()?;
        if !device.arcade {
            env.invalid_command(DEVICE_FALLBACK)?;
            return Ok(Transition::Stay);
        }
        match env.launcher.launch(env.snake) {
            Ok(code) => log::debug!("snake exited with {code}"),
            Err(e) => {
                log::warn!("snake failed: {e}");
                env.blank()?;
                env.say(&format!("Unable to start snake: {e}"))?;
            },
        }
        env.blank()?;
        Ok(Transition::Stay)
    }
}

/// Register the remote device commands in dispatch order.
pub fn register_device_commands(shell: &mut Shell) {
    shell.register(Box::new(ExitCmd));
    shell.register(Box::new(HelpCmd));
    shell.register(Box::new(ListCmd));
    shell.register(Box::new(ClearCmd));
    shell.register(Box::new(SnakeCmd));
}

/// The remote device shell, shared by every device.
pub fn device_shell() -> Shell {
    let mut shell = Shell::new(DEVICE_FALLBACK);
    register_device_commands(&mut shell);
    shell
}
