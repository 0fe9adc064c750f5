//! Tests for the session loop.

use std::time::Duration;

use coal_audio::Cue;
use coal_content::{ContentKey, DirContent, MemoryContent};
use proptest::prelude::*;

use crate::crack_commands::{FTPEA_FALLBACK, SSCRACK_FALLBACK};
use crate::device_commands::DEVICE_FALLBACK;
use crate::root_commands::ROOT_FALLBACK;
use crate::testing::Harness;
use crate::vault::DeviceId;

use super::*;

const VB0SE: &str = "177.93.84.162.14";
const ARCADE: &str = "98.712.345.63.28";

fn session(h: &mut Harness) -> Session<'_> {
    Session::new(
        &mut h.console,
        &h.content,
        &h.notifier,
        &h.clock,
        &h.launcher,
    )
    .with_policy(h.policy)
    .skip_boot()
}

fn run(inputs: &[&str]) -> (Harness, SessionEnd) {
    let mut h = Harness::new(inputs);
    let end = session(&mut h).run().unwrap();
    (h, end)
}

fn last_prompt(h: &Harness) -> &str {
    h.console.prompts().last().copied().unwrap_or_default()
}

fn revealed_secret(h: &Harness) -> Option<String> {
    h.console.lines().iter().find_map(|l| {
        l.strip_prefix("Password found: ")
            .or_else(|| l.strip_prefix("Password is : "))
            .map(str::to_string)
    })
}

// ---------------------------------------------------------------------------
// Start and end
// ---------------------------------------------------------------------------

#[test]
fn boots_then_prompts_at_root() {
    let mut h = Harness::new(&[]);
    let end = Session::new(
        &mut h.console,
        &h.content,
        &h.notifier,
        &h.clock,
        &h.launcher,
    )
    .run()
    .unwrap();
    assert_eq!(end, SessionEnd::EndOfInput);
    assert_eq!(h.notifier.count(Cue::Startup), 1);
    assert_eq!(h.console.prompts(), vec!["root > "]);
    assert!(h.console.printed("Coal OS - ver 1.4.6"));
}

#[test]
fn end_of_input_at_prompt() {
    let (h, end) = run(&[]);
    assert_eq!(end, SessionEnd::EndOfInput);
    assert_eq!(h.console.prompts(), vec!["root > "]);
}

#[test]
fn end_of_input_inside_a_command() {
    let (h, end) = run(&["aircon", VB0SE]);
    assert_eq!(end, SessionEnd::EndOfInput);
    assert_eq!(last_prompt(&h), "root ~ Enter Password : ");
}

#[test]
fn logout_accepts_normalized_y() {
    for answer in ["y", "Y", "  y ", "y\t"] {
        let (h, end) = run(&["logout", answer, "help"]);
        assert_eq!(end, SessionEnd::Logout, "{answer:?}");
        assert!(h.console.printed("Goodbye..."));
        assert_eq!(h.notifier.count(Cue::Shutdown), 1);
        assert_eq!(h.console.remaining_inputs(), 1);
    }
}

#[test]
fn logout_declined_resumes_root() {
    for answer in ["n", "N", "", "yes", "sure"] {
        let (h, end) = run(&["logout", answer]);
        assert_eq!(end, SessionEnd::EndOfInput, "{answer:?}");
        assert_eq!(last_prompt(&h), "root > ");
        assert!(!h.console.printed("Goodbye..."));
    }
}

#[test]
fn console_failure_ends_session_with_error() {
    struct BrokenConsole;
    impl Console for BrokenConsole {
        fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
            Ok(Some("help".to_string()))
        }
        fn write_line(&mut self, _text: &str) -> Result<()> {
            Err(std::io::Error::other("broken pipe").into())
        }
        fn write_inline(&mut self, text: &str) -> Result<()> {
            self.write_line(text)
        }
        fn clear(&mut self) -> Result<()> {
            Ok(())
        }
        fn pause(&mut self, _delay: Duration) {}
    }

    let h = Harness::new(&[]);
    let mut console = BrokenConsole;
    let err = Session::new(
        &mut console,
        &h.content,
        &h.notifier,
        &h.clock,
        &h.launcher,
    )
    .skip_boot()
    .run()
    .unwrap_err();
    assert!(matches!(err, CoalError::Io(_)));
}

// ---------------------------------------------------------------------------
// Shell stack
// ---------------------------------------------------------------------------

#[test]
fn tool_shells_enter_and_leave() {
    let (h, _) = run(&["sscrack", "exit", "ftpea", "exit"]);
    assert_eq!(
        h.console.prompts(),
        vec![
            "root > ",
            "root ~ SScrack > ",
            "root > ",
            "root ~ FTpea > ",
            "root > ",
        ]
    );
}

#[test]
fn legacy_fallback_after_valid_root_command() {
    let (h, _) = run(&["ftpea"]);
    assert_eq!(h.console.count(ROOT_FALLBACK), 1);
    assert_eq!(last_prompt(&h), "root ~ FTpea > ");

    let (h, _) = run(&["sscrack"]);
    assert_eq!(h.console.count(ROOT_FALLBACK), 0);
}

#[test]
fn exclusive_dispatch_has_no_stray_fallback() {
    let mut h = Harness::new(&["help", "ftpea", "help"]);
    session(&mut h)
        .with_dispatch(DispatchMode::Exclusive)
        .run()
        .unwrap();
    assert!(!h.console.printed(ROOT_FALLBACK));
    assert!(!h.console.printed(FTPEA_FALLBACK));
}

#[test]
fn device_exit_returns_to_root() {
    let mut h = Harness::new(&["aircon", ARCADE, "AllTheGames911711"]);
    let mut s = session(&mut h);
    s.run().unwrap();
    assert_eq!(s.stack(), &[ShellId::Root, ShellId::Device(DeviceId(ARCADE))]);
    drop(s);
    assert_eq!(last_prompt(&h), "root ~ 98.712.345.63.28 > ");

    let (h, _) = run(&["aircon", ARCADE, "AllTheGames911711", "exit"]);
    assert_eq!(last_prompt(&h), "root > ");
    assert!(h.console.printed("Disconnecting from  98.712.345.63.28  ..."));
}

#[test]
fn restart_reboots_at_root() {
    let (h, end) = run(&["restart"]);
    assert_eq!(end, SessionEnd::EndOfInput);
    assert_eq!(h.notifier.count(Cue::Startup), 1);
    assert_eq!(h.console.prompts(), vec!["root > ", "root > "]);
    assert!(h.console.printed("Coal OS - ver 1.4.6"));
}

#[test]
fn fault_returns_to_root() {
    let mut h = Harness::new(&["sscrack", "help", "help"]);
    let mut content = MemoryContent::new();
    content.insert(ContentKey::SsCrackBanner, "SScrack");
    h.content = content;
    session(&mut h).run().unwrap();
    assert_eq!(
        h.console.prompts(),
        vec!["root > ", "root ~ SScrack > ", "root > ", "root > "]
    );
    assert!(h.console.printed(
        "System fault: content error: no such resource: help/sscrack. Returning to root..."
    ));
}

#[test]
fn unreadable_content_file_returns_to_root() {
    let dir = tempfile::tempdir().unwrap();
    let help = dir.path().join("Help/root.txt");
    std::fs::create_dir_all(help.parent().unwrap()).unwrap();
    std::fs::write(&help, b"caf\xe9\n").unwrap();
    let content = DirContent::new(dir.path()).with_fallback(MemoryContent::builtin());

    let mut h = Harness::new(&["help", "cal"]);
    let end = Session::new(
        &mut h.console,
        &content,
        &h.notifier,
        &h.clock,
        &h.launcher,
    )
    .skip_boot()
    .run()
    .unwrap();

    assert_eq!(end, SessionEnd::EndOfInput);
    assert_eq!(h.console.prompts(), vec!["root > ", "root > ", "root > "]);
    let lines = h.console.lines();
    assert!(
        lines
            .iter()
            .any(|l| l.starts_with("System fault: content error: help/root")),
        "{lines:?}"
    );
    assert!(h.console.printed("7 3 2026 / 14 : 5"));
}

#[test]
fn configure_applies_policy_dispatch_and_game() {
    let config = CoalConfig::from_toml_str(
        "[auth]\npolicy = \"strict\"\n[dispatch]\nmode = \"exclusive\"\n[games]\nsnake = [\"snake-game\", \"--fast\"]\n",
    )
    .unwrap();
    let mut h = Harness::new(&[
        "aircon",
        ARCADE,
        "AllTheGames911711",
        "snake",
        "exit",
        "sscrack",
        "porthack",
        VB0SE,
        "X",
        "1",
    ]);
    Session::new(
        &mut h.console,
        &h.content,
        &h.notifier,
        &h.clock,
        &h.launcher,
    )
    .configure(&config)
    .skip_boot()
    .run()
    .unwrap();
    assert_eq!(
        *h.launcher.launched.borrow(),
        vec![vec!["snake-game".to_string(), "--fast".to_string()]]
    );
    assert!(!h.console.printed(ROOT_FALLBACK));
    assert!(!h.console.printed(DEVICE_FALLBACK));
    assert!(revealed_secret(&h).is_none());
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn porthack_secret_logs_into_corp_device() {
    let (h, end) = run(&[
        "sscrack",
        "porthack",
        VB0SE,
        "X",
        "9",
        "exit",
        "aircon",
        VB0SE,
        "Discrom77681E4QR!",
    ]);
    assert_eq!(end, SessionEnd::EndOfInput);
    assert!(h.console.printed("Password found: Discrom77681E4QR!"));
    assert!(h.console.printed("  Device IP : 177.93.84.162.14 | Device Name : VB0SE_CORP"));
    assert_eq!(last_prompt(&h), "root ~ 177.93.84.162.14 > ");
}

#[test]
fn strict_policy_rejects_wrong_mac_and_reprompts() {
    let mut h = Harness::new(&["sscrack", "porthack", VB0SE, "X", "9"]);
    h.policy = AuthPolicy::Strict;
    session(&mut h).run().unwrap();
    assert!(h.console.printed(
        "root ~ SScrack > PortMAC  X  is invalid, is protected against this attack, or already open..."
    ));
    assert!(revealed_secret(&h).is_none());
    assert_eq!(last_prompt(&h), "root ~ SScrack > ");
}

#[test]
fn unknown_identity_is_reported_and_reprompted() {
    let (h, _) = run(&["aircon", "1.1.1.1", "pw"]);
    assert!(h.console.printed("IP address, 1.1.1.1 is invalid..."));
    assert_eq!(last_prompt(&h), "root > ");

    let (h, _) = run(&["ftpea", "overflow", "1.1.1.1", "m", "p"]);
    assert!(h.console.printed(
        "root ~ FTpea > The IP Address,  1.1.1.1  is invalid, is protected against this attack, or already open..."
    ));
    assert_eq!(last_prompt(&h), "root ~ FTpea > ");
}

#[test]
fn every_revealed_secret_logs_into_its_device() {
    let cases = vec![
        (vec!["aireplay", "735.92.44.64.846", "Zx@P!o33Q7"], "735.92.44.64.846", "Zx@P!o33Q7"),
        (vec!["aireplay", "653.67.49.847.46", "Hals_Comp"], "653.67.49.847.46", "Hal's_Comp"),
        (vec!["aireplay", "273.84.845.53.32", "NVB_271324"], "273.84.845.53.32", "NVB_271324"),
        (vec!["aireplay", ARCADE, "RF8_11G4M3"], ARCADE, "RF8_11G4M3"),
        (
            vec!["sscrack", "porthack", VB0SE, "6g:11:hf:9q:mb:pi:97:2i", "1", "exit"],
            VB0SE,
            "VB0SE_CORP",
        ),
        (
            vec!["ftpea", "overflow", "31.638.48.35.744", "lr:5t:io:11:7e:p0:jy:1t", "2", "exit"],
            "31.638.48.35.744",
            "DESKNo.747",
        ),
    ];
    for (crack, ip, name) in &cases {
        let (h, _) = run(crack);
        let secret = revealed_secret(&h).unwrap_or_else(|| panic!("no secret for {ip}"));

        let (h, _) = run(&["aircon", *ip, secret.as_str()]);
        assert!(
            h.console
                .printed(&format!("  Device IP : {ip} | Device Name : {name}")),
            "{ip}"
        );
        assert_eq!(last_prompt(&h), format!("root ~ {ip} > "));
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

struct Path {
    inputs: &'static [&'static str],
    prompt: &'static str,
    fallback: &'static str,
    shell: fn() -> Shell,
}

const PATHS: &[Path] = &[
    Path {
        inputs: &[],
        prompt: "root > ",
        fallback: ROOT_FALLBACK,
        shell: crate::root_commands::root_shell,
    },
    Path {
        inputs: &["sscrack"],
        prompt: "root ~ SScrack > ",
        fallback: SSCRACK_FALLBACK,
        shell: crate::crack_commands::sscrack_shell,
    },
    Path {
        inputs: &["ftpea"],
        prompt: "root ~ FTpea > ",
        fallback: FTPEA_FALLBACK,
        shell: crate::crack_commands::ftpea_shell,
    },
    Path {
        inputs: &["aircon", ARCADE, "AllTheGames911711"],
        prompt: "root ~ 98.712.345.63.28 > ",
        fallback: DEVICE_FALLBACK,
        shell: crate::device_commands::device_shell,
    },
];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn garbage_keeps_the_shell(
        which in 0..PATHS.len(),
        garbage in prop::collection::vec("[a-zA-Z0-9 .:]{0,16}", 1..8),
    ) {
        let path = &PATHS[which];
        let shell = (path.shell)();
        prop_assume!(garbage.iter().all(|line| !shell.recognizes(line)));

        let mut inputs: Vec<&str> = path.inputs.to_vec();
        inputs.extend(garbage.iter().map(String::as_str));
        let mut h = Harness::new(&inputs);
        let end = session(&mut h).run().unwrap();

        prop_assert_eq!(end, SessionEnd::EndOfInput);
        let prompts = h.console.prompts();
        let after_entry = &prompts[prompts.len() - garbage.len() - 1..];
        for prompt in after_entry {
            prop_assert_eq!(*prompt, path.prompt);
        }
        prop_assert_eq!(h.console.count(path.fallback), garbage.len());
        prop_assert!(h.notifier.count(Cue::Error) >= garbage.len());
    }
}
