//! Narrative scripts: static sequences of timed beats.
//!
//! Text beats may reference `{ip}`, `{target}` and `{secret}`, which the
//! sequencer fills from the attempt that triggered the script.

use coal_audio::{Cue, Playback};
use coal_content::ContentKey;

/// One step of a narrative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Beat {
    /// Print a line (interpolated).
    Say(&'static str),
    /// Print an empty line.
    Blank,
    /// Wait, in milliseconds.
    Pause(u64),
    /// Clear the screen.
    Clear,
    /// Print a text resource verbatim.
    Render(ContentKey),
    /// Fire an audio cue.
    Cue(Cue, Playback),
    /// Run a shared run of beats in place.
    Seq(&'static [Beat]),
    /// Run `beats` `times` times.
    Repeat {
        times: usize,
        beats: &'static [Beat],
    },
    /// A progress bar of `steps` steps. Each step waits `step_ms` and then
    /// runs `redraw`.
    Progress {
        label: &'static str,
        width: usize,
        steps: usize,
        step_ms: u64,
        redraw: &'static [Beat],
    },
}

/// A named narrative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Script {
    pub name: &'static str,
    pub beats: &'static [Beat],
    /// Line printed after the beats when a secret is known.
    pub reveal: Option<&'static str>,
}

impl Script {
    /// Sum of every pause in the script, progress steps included.
    pub fn total_pause_ms(&self) -> u64 {
        pause_ms(self.beats)
    }
}

fn pause_ms(beats: &[Beat]) -> u64 {
    beats
        .iter()
        .map(|beat| match beat {
            Beat::Pause(ms) => *ms,
            Beat::Seq(beats) => pause_ms(beats),
            Beat::Repeat { times, beats } => *times as u64 * pause_ms(beats),
            Beat::Progress {
                steps,
                step_ms,
                redraw,
                ..
            } => *steps as u64 * (step_ms + pause_ms(redraw)),
            _ => 0,
        })
        .sum()
}

// ---------------------------------------------------------------------------
// SScrack porthack
// ---------------------------------------------------------------------------

/// SSH attack run by `porthack`. `{target}` is the MAC address.
pub const SSH_ATTACK: Script = Script {
    name: "ssh-attack",
    beats: &[
        Beat::Blank,
        Beat::Say(
            "root ~ SScrack > Starting SSH attack against MAC Address :  {target}  ( Port IP :  {ip}  ) ...",
        ),
        Beat::Pause(3500),
        Beat::Blank,
        Beat::Say("root ~ SScrack > Accessing client..."),
        Beat::Pause(1600),
        Beat::Blank,
        Beat::Say("root ~ SScrack > Locating encryption key..."),
        Beat::Pause(3000),
        Beat::Blank,
        Beat::Say("root ~ SScrack > Locating encryption key (46%)..."),
        Beat::Pause(5000),
        Beat::Blank,
        Beat::Say("root ~ SScrack > Locating encryption key (79%)..."),
        Beat::Pause(3500),
        Beat::Blank,
        Beat::Say("root ~ SScrack > Encryption key located  :)"),
        Beat::Pause(1000),
        Beat::Blank,
        Beat::Say("root ~ SScrack > Decrypting data..."),
        Beat::Pause(3000),
        Beat::Blank,
        Beat::Say("root ~ SScrack > Decrypting data (28%)..."),
        Beat::Pause(4500),
        Beat::Blank,
        Beat::Say("root ~ SScrack > Decrypting data (46%)..."),
        Beat::Pause(5000),
        Beat::Blank,
        Beat::Say("root ~ SScrack > Decrypting data (67%)..."),
        Beat::Pause(2400),
        Beat::Blank,
        Beat::Say("root ~ SScrack > Decrypting data (82%)..."),
        Beat::Pause(3500),
        Beat::Blank,
        Beat::Say("root ~ SScrack > Decrypting data (97%)..."),
        Beat::Pause(2000),
        Beat::Blank,
        Beat::Say("root ~ SScrack > Data Decrypted  :)"),
        Beat::Pause(1500),
        Beat::Blank,
        Beat::Say("root ~ SScrack > Port Unlocked !"),
        Beat::Pause(600),
    ],
    reveal: Some("Password found: {secret}"),
};

// ---------------------------------------------------------------------------
// FTpea overflow
// ---------------------------------------------------------------------------

const FTP_HEADER: &[Beat] = &[
    Beat::Clear,
    Beat::Render(ContentKey::FtPeaBanner),
    Beat::Blank,
    Beat::Blank,
    Beat::Say("Beginning FTP overflow attack on client  {ip}  ( MAC Address :  {target}  ) ..."),
];

/// FTP overflow run by `overflow`. `{target}` is the MAC address.
pub const FTP_OVERFLOW: Script = Script {
    name: "ftp-overflow",
    beats: &[
        Beat::Seq(FTP_HEADER),
        Beat::Pause(4000),
        Beat::Blank,
        Beat::Progress {
            label: "Gathering processing power : ",
            width: 20,
            steps: 25,
            step_ms: 210,
            redraw: &[
                Beat::Seq(FTP_HEADER),
                Beat::Blank,
            ],
        },
        Beat::Blank,
        Beat::Say("Breaching firewall ..."),
        Beat::Pause(3500),
        Beat::Blank,
        Beat::Say("Locating servers ..."),
        Beat::Pause(4800),
        Beat::Blank,
        Beat::Say("Servers located !"),
        Beat::Pause(1000),
        Beat::Blank,
        Beat::Say("Directing all packet flow to  {target} ..."),
        Beat::Pause(6500),
        Beat::Blank,
        Beat::Say("High data traffic on,  {ip}  detected ..."),
        Beat::Pause(3500),
        Beat::Blank,
        Beat::Say("Overflow successful, port unlocked !"),
        Beat::Pause(500),
    ],
    reveal: Some("Password found: {secret}"),
};

// ---------------------------------------------------------------------------
// aireplay
// ---------------------------------------------------------------------------

/// Wireless handshake crack run by `aireplay`. `{target}` is the ESSID.
pub const WIRELESS_CRACK: Script = Script {
    name: "wireless-crack",
    beats: &[
        Beat::Blank,
        Beat::Say("Starting attack against {target} (IP address : {ip} )"),
        Beat::Pause(4500),
        Beat::Blank,
        Beat::Say("acquiring handshakes..."),
        Beat::Pause(3000),
        Beat::Say("acquiring handshakes (25%)..."),
        Beat::Pause(1500),
        Beat::Say("acquiring handshakes (50%)..."),
        Beat::Pause(2000),
        Beat::Say("acquiring handshakes (75%)..."),
        Beat::Pause(2500),
        Beat::Say("acquiring handshakes (100%)..."),
        Beat::Pause(600),
        Beat::Blank,
        Beat::Say("Overview of captured handshakes:"),
        Beat::Blank,
        Beat::Pause(1000),
        Beat::Say(
            "Captured handshake from ' {ip} ' : Contained a valid handshake : File saved to list 'redy2crack'...",
        ),
        Beat::Pause(600),
        Beat::Say(
            "Captured handshake from ' {target} ' : Contained a valid handshake that matches that of ' {ip} '...",
        ),
        Beat::Pause(2500),
        Beat::Blank,
        Beat::Say("Attempting password crack from dictionary, 'probable'..."),
        Beat::Pause(5000),
        Beat::Say("Password crack failed..."),
        Beat::Pause(3000),
        Beat::Blank,
        Beat::Say("Attempting password crack from dictionary, 'backup'..."),
        Beat::Pause(7000),
        Beat::Blank,
        Beat::Say("Password crack successful..."),
        Beat::Pause(1000),
    ],
    reveal: Some("Password is : {secret}"),
};
