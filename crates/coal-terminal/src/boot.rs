//! Boot sequence: BIOS scroll, binary scan, progress bar and version
//! banner. Runs at start-up and on `restart`.

use coal_audio::{Cue, Playback};
use coal_content::ContentKey;
use coal_types::error::Result;

use crate::narrative::{NarrativeContext, Sequencer};
use crate::script::{Beat, Script};

const BINARY_BLOCK: &[Beat] = &[
    Beat::Say(
        "x 0101010101111011111010101 x 1001011000011001000100 x 101011111111011111000111101011111101111 xx 011001",
    ),
    Beat::Say(
        "01010100100000011111111 x 011001101 xx 1001010101000000111111101110101111000101111111110111010011101",
    ),
    Beat::Pause(100),
    Beat::Say(
        "010100001111111111111100111000011111010001111 x 0101000111111111011010000011110101110101111100101 x 001",
    ),
    Beat::Say(
        "0111110000000001 x 1101110111110101011111111101101001011 xx 10011110000101010000010101000011 x 111110101",
    ),
    Beat::Say(
        "11111111111111011111 x 11111101101111111111000000111111110110101 x 011110101010111111010111010101 x 0111",
    ),
    Beat::Pause(100),
    Beat::Say(
        "00001010101 xx 0100011001100110101 x 01010101010001111111101 x 010101011111010111 x 0100101010101101101001",
    ),
    Beat::Pause(100),
    Beat::Say(
        "x 0101010101111011111010101 x 1001011000011001000100 x 101011111111011111000111101011111101111 xx 011001",
    ),
    Beat::Say(
        "01010100100000011111111 x 01100 x 11 x 01 xx 1001010101000000111111101110101111000101111111110111010011101",
    ),
    Beat::Pause(200),
    Beat::Say(
        "11111101010101111111101101010000111110000111001101111000110101011 xx 10100111111011011 x 0110110100111",
    ),
    Beat::Say(
        "010100001111111111111100111000011111010001111 x 0101000111111111011010000011110101110101111100101001",
    ),
    Beat::Pause(100),
    Beat::Say(
        "00001010 x 00001111111 x 1111111100000 x 101001010100001111000001010010 x 10100000001011100000 x 000101",
    ),
];

/// Rows of padding above the boot progress bar.
const PADDING_ROWS: usize = 23;

const PADDING: &[Beat] = &[Beat::Blank];

/// The start-up script.
pub const BOOT: Script = Script {
    name: "boot",
    beats: &[
        Beat::Clear,
        Beat::Cue(Cue::Warmup, Playback::Background),
        Beat::Render(ContentKey::BootBanner),
        Beat::Blank,
        Beat::Blank,
        Beat::Pause(400),
        Beat::Say("Calculated RAMsize: 66816233991524 Mb"),
        Beat::Pause(200),
        Beat::Blank,
        Beat::Say("BIOS load sequence :"),
        Beat::Say("     stepfunction(), load_clientend.jss..."),
        Beat::Say("     setvar.kernel/serverside.IPbinder.doccer_iv/447159098.tic"),
        Beat::Pause(300),
        Beat::Say("     query-88gheerq:latest.timedata;myname - kerneldriver.reqest_update..."),
        Beat::Pause(200),
        Beat::Say("     get-update.88611234637441010040083769393-OSpatch.xss"),
        Beat::Say("     apt-frombinaryConverter-ver.5.7.1/import * ..."),
        Beat::Say("     sudo-download arq-rootaccess/account88611 ..."),
        Beat::Pause(200),
        Beat::Say("     root access obtained!"),
        Beat::Pause(100),
        Beat::Blank,
        Beat::Say("     locate-manic\\[yy67j-bio_reqesit-pack66]_update*()"),
        Beat::Say("     VssC++//C:1148-PSERRCODE#:55437889 / PKGNOTFOUND !"),
        Beat::Say("     Preparing issue fix :"),
        Beat::Pause(200),
        Beat::Say("          - Restart xx00001288447859000.tic"),
        Beat::Say("          - pkgFF0 rebootemulator.vdc-nowfunctional()"),
        Beat::Pause(200),
        Beat::Say(
            "     - The following process will restart : xx00001288447859000.tic, serverside.IPbinder.doccer_iv/881343901.jsx",
        ),
        Beat::Pause(100),
        Beat::Say("          RESTARTING ..."),
        Beat::Pause(300),
        Beat::Say("          reboot complete()"),
        Beat::Pause(100),
        Beat::Blank,
        Beat::Say("     scanning for error No. VssC++//C:1148-PSERRCODE#:55437889 ..."),
        Beat::Pause(300),
        Beat::Say("     PKG VssC++//C:1148-PSERRCODE#:55437889 successfully imported !"),
        Beat::Pause(200),
        Beat::Blank,
        Beat::Say("Scanning binaries:"),
        Beat::Pause(200),
        Beat::Blank,
        Beat::Repeat {
            times: 4,
            beats: BINARY_BLOCK,
        },
        Beat::Pause(200),
        Beat::Blank,
        Beat::Say("Scan complete: No errors"),
        Beat::Pause(100),
        Beat::Blank,
        Beat::Say("     Importing additional dependencies and utils:"),
        Beat::Say("          - FTpea ver.8.4.6 ..."),
        Beat::Pause(200),
        Beat::Say("          - SScrack ver.2.1.3 ..."),
        Beat::Pause(100),
        Beat::Say("     <o>  - Nmap ver.8.9.1"),
        Beat::Pause(100),
        Beat::Say("          - sysOther ver.7.2.2 "),
        Beat::Pause(200),
        Beat::Say("          - FireKernel ver 5.8.9"),
        Beat::Pause(200),
        Beat::Say("          - BinaryConverter ver 5.7.1"),
        Beat::Pause(100),
        Beat::Blank,
        Beat::Say("     running diagnostic test ..."),
        Beat::Pause(600),
        Beat::Blank,
        Beat::Blank,
        Beat::Say("BIOS loader complete!"),
        Beat::Pause(800),
        Beat::Clear,
        Beat::Repeat {
            times: PADDING_ROWS,
            beats: PADDING,
        },
        Beat::Progress {
            label: "                                                   Booting Operating System : ",
            width: 70,
            steps: 20,
            step_ms: 210,
            redraw: &[
                Beat::Clear,
                Beat::Repeat {
                    times: PADDING_ROWS,
                    beats: PADDING,
                },
            ],
        },
        Beat::Blank,
        Beat::Blank,
        Beat::Say("                                                  ! Setup Complete !"),
        Beat::Blank,
        Beat::Cue(Cue::Startup, Playback::Blocking),
        Beat::Clear,
        Beat::Cue(Cue::Idle, Playback::Loop),
        Beat::Blank,
        Beat::Say("Coal OS - ver 1.4.6"),
        Beat::Say("Developed by 'Downtime' and 'Dr. Mass'"),
        Beat::Say("----------------------------------------------"),
        Beat::Blank,
    ],
    reveal: None,
};

/// Play the boot sequence.
pub fn run(sequencer: &mut Sequencer<'_>) -> Result<()> {
    log::info!("Booting");
    sequencer.run(&BOOT, &NarrativeContext::default())
}
