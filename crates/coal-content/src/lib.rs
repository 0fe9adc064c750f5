//! Content provider for CoalOS.
//!
//! Shells and narratives never embed their art or listings. They ask a
//! `ContentProvider` for the text behind a stable `ContentKey` and stream it
//! to the console verbatim. Two stores exist: an in-memory store (with the
//! built-in texts) and a directory store reading the `Dependencies/` layout.

mod builtin;
mod dir;
mod memory;

pub use dir::DirContent;
pub use memory::MemoryContent;

use coal_types::error::Result;

/// Stable identifier of a text resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContentKey {
    BootBanner,
    SsCrackBanner,
    FtPeaBanner,
    NmapBanner,
    RootHelp,
    SsCrackHelp,
    FtPeaHelp,
    DeviceHelp,
    WirelessList,
    Headlines,
    /// File listing of a remote device (1-based, `device01`..).
    DeviceListing(u8),
    /// Port scan result for a scannable address (1-based, `nmap1`..).
    PortScan(u8),
}

impl ContentKey {
    /// Stable key used in logs and error messages.
    pub fn id(&self) -> String {
        match self {
            Self::BootBanner => "graphics/boot".to_string(),
            Self::SsCrackBanner => "graphics/sscrack".to_string(),
            Self::FtPeaBanner => "graphics/ftpea".to_string(),
            Self::NmapBanner => "graphics/nmap".to_string(),
            Self::RootHelp => "help/root".to_string(),
            Self::SsCrackHelp => "help/sscrack".to_string(),
            Self::FtPeaHelp => "help/ftpea".to_string(),
            Self::DeviceHelp => "help/device".to_string(),
            Self::WirelessList => "tools/iwlist".to_string(),
            Self::Headlines => "tools/headlines".to_string(),
            Self::DeviceListing(n) => format!("tools/syslist/device{n:02}"),
            Self::PortScan(n) => format!("tools/nmap/nmap{n}"),
        }
    }

    /// Relative path of the resource inside an on-disk content tree.
    pub fn path(&self) -> String {
        match self {
            Self::BootBanner => "Graphics/boot.txt".to_string(),
            Self::SsCrackBanner => "Graphics/sscrack.txt".to_string(),
            Self::FtPeaBanner => "Graphics/ftpea.txt".to_string(),
            Self::NmapBanner => "Graphics/nmap.txt".to_string(),
            Self::RootHelp => "Help/root.txt".to_string(),
            Self::SsCrackHelp => "Help/sscrack.txt".to_string(),
            Self::FtPeaHelp => "Help/ftpea.txt".to_string(),
            Self::DeviceHelp => "Help/device.txt".to_string(),
            Self::WirelessList => "Tools/iwlist.txt".to_string(),
            Self::Headlines => "Tools/headlines.txt".to_string(),
            Self::DeviceListing(n) => format!("Tools/SysList/device{n:02}.txt"),
            Self::PortScan(n) => format!("Tools/Nmap/nmap{n}.txt"),
        }
    }
}

impl std::fmt::Display for ContentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id())
    }
}

/// Source of text resources.
pub trait ContentProvider {
    /// Fetch the full text behind `key`.
    fn load(&self, key: ContentKey) -> Result<String>;

    /// Fetch `key` and split it into lines, dropping blank ones.
    fn lines(&self, key: ContentKey) -> Result<Vec<String>> {
        Ok(self
            .load(key)?
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.trim().is_empty())
            .map(str::to_string)
            .collect())
    }
}
