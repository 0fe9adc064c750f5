//! Built-in texts used when no content directory is configured.

use crate::{ContentKey, MemoryContent};

const BOOT: &str = r"
   ______            __   ____  _____
  / ____/___  ____ _/ /  / __ \/ ___/
 / /   / __ \/ __ `/ /  / / / /\__ \
/ /___/ /_/ / /_/ / /  / /_/ /___/ /
\____/\____/\__,_/_/   \____//____/
";

const SSCRACK: &str = r"
  ____ ____                  _
 / ___/ ___|  ___ _ __ __ _ | | __
 \___ \___ \ / __| '__/ _` || |/ /
  ___) |__) | (__| | | (_| ||   <
 |____/____/ \___|_|  \__,_||_|\_\   ver.2.1.3
";

const FTPEA: &str = r"
  _____ _____
 |  ___|_   _|__   ___  __ _
 | |_    | || '_ \ / _ \/ _` |
 |  _|   | || |_) |  __/ (_| |
 |_|     |_|| .__/ \___|\__,_|   ver.8.4.6
            |_|
";

const NMAP: &str = r"
  _ __  _ __ ___   __ _ _ __
 | '_ \| '_ ` _ \ / _` | '_ \
 | | | | | | | | | (_| | |_) |
 |_| |_|_| |_| |_|\__,_| .__/   ver.8.9.1
                       |_|
";

const ROOT_HELP: &str = "\
List of commands:

     aireplay - cracks 'open' wireless connections

     aircon - connects to an open wireless connection

     cal - prints the current date and time

     clear - clears the screen

     FTpea - cracks ports that are vulnerable to FTP hacks

     help - displays list of commands

     iwlist - scans for, and displays nearby wireless internet connections

     logout - exit CoalOS

     news - display the latest news reports from all over

     nmap - scans input IP for available ports

     restart - restarts CoalOS

     SScrack - cracks ports that are vulnerable to SSH hacks
";

const SSCRACK_HELP: &str = "\
---------------------------------------------------------

porthack - cracks SSH vulnerable ports

exit - disconnect from the SScrack client

help - displays this help list

---------------------------------------------------------
";

const FTPEA_HELP: &str = "\
---------------------------------------------------

exit : exit the FTpea client
help : pea-rints this help statement
overflow : overflow port with \"peas\"

---------------------------------------------------
";

const DEVICE_HELP: &str = "\
-----------------------------------------------------------------------------------------
clear - clears the screen
exit - disconnect from current connection
help - displays this screen
list - lists the whole filesystem
-----------------------------------------------------------------------------------------
";

const IWLIST: &str = "\
 ESSID              ADDRESS             CHANNEL   QUALITY   ENCRYPTION
 Zx@P!o33Q7         735.92.44.64.846    6         71/100    WPA2
 Hals_Comp          653.67.49.847.46    11        64/100    WPA2
 NVB_271324         273.84.845.53.32    1         52/100    WEP
 RF8_11G4M3         98.712.345.63.28    6         88/100    WPA
 VB0SE_CORP         <hidden>            3         40/100    ENTERPRISE
 DESKNo.747         <hidden>            9         35/100    ENTERPRISE
 linksys            <hidden>            1         12/100    NONE
";

const HEADLINES: &str = "\
Breaking: Quantum computer breaks RSA encryption
Cybersecurity firm reports major data breach
New AI algorithm predicts network vulnerabilities
Hackers target critical infrastructure worldwide
Government announces new cybersecurity initiative
VB0SE Corp denies rumours of an unpatched SSH gateway
Local arcade owner claims his home network is 'unhackable'
";

const DEVICE01: &str = "\
/home/zx/
    notes.txt
    wallpaper.png
/home/zx/downloads/
    setup_router.exe
/etc/
    hosts
";

const DEVICE02: &str = "\
/home/hal/
    todo.txt          -> 'ask IT about the VB0SE gateway at 177.93.84.162.14'
    taxes_2019.xls
/home/hal/music/
    mixtape_07.mp3
";

const DEVICE03: &str = "\
/srv/nvb/
    backup.tar.gz
    ftp_targets.txt   -> '31.638.48.35.744'
/var/log/
    auth.log
";

const DEVICE04: &str = "\
/corp/vb0se/
    payroll.db
    board_minutes.pdf
/corp/vb0se/keys/
    id_rsa
    id_rsa.pub
";

const DEVICE05: &str = "\
/desk747/
    timetable.xls
    platform_6_schedule.pdf
/desk747/mail/
    inbox.mbox
";

const DEVICE06: &str = "\
/games/
    snake
    highscores.txt
/games/roms/
    (empty)
";

const NMAP1: &str = "\
Nmap scan report for 177.93.84.162.14
PORT     STATE    SERVICE   MAC
1/tcp    open     ssh       6g:11:hf:9q:mb:pi:97:2i
2/tcp    open     ssh       y3:91:4r:gt:ue:33:7o:p1
3/tcp    open     ssh       00:r1:o8:v7:nq:73:55:o8
";

const NMAP2: &str = "\
Nmap scan report for 31.638.48.35.744
PORT     STATE    SERVICE   MAC
1/tcp    open     ftp       lr:5t:io:11:7e:p0:jy:1t
2/tcp    open     ftp       44:te:n7:mp:1q:re:b4:99
3/tcp    open     ftp       cc:45:h7:9b:ar:oo:u7:76
4/tcp    open     ftp       zx:12:5r:yy:pi:yn:44:11
";

/// Fill `store` with every built-in text.
pub(crate) fn populate(store: &mut MemoryContent) {
    store.insert(ContentKey::BootBanner, BOOT);
    store.insert(ContentKey::SsCrackBanner, SSCRACK);
    store.insert(ContentKey::FtPeaBanner, FTPEA);
    store.insert(ContentKey::NmapBanner, NMAP);
    store.insert(ContentKey::RootHelp, ROOT_HELP);
    store.insert(ContentKey::SsCrackHelp, SSCRACK_HELP);
    store.insert(ContentKey::FtPeaHelp, FTPEA_HELP);
    store.insert(ContentKey::DeviceHelp, DEVICE_HELP);
    store.insert(ContentKey::WirelessList, IWLIST);
    store.insert(ContentKey::Headlines, HEADLINES);
    for (n, text) in [DEVICE01, DEVICE02, DEVICE03, DEVICE04, DEVICE05, DEVICE06]
        .into_iter()
        .enumerate()
    {
        store.insert(ContentKey::DeviceListing(n as u8 + 1), text);
    }
    store.insert(ContentKey::PortScan(1), NMAP1);
    store.insert(ContentKey::PortScan(2), NMAP2);
}
