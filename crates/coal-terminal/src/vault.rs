//! Credential vault: the static table of crackable identities, their
//! secrets and the remote devices those secrets unlock.
//!
//! Records are matched in table order. Rules marked `disjunctive` were
//! historically checked as `x == 'a' or 'b'`, which is always true, so
//! `AuthPolicy::LegacyPrimaryOnly` skips them.

use coal_content::ContentKey;
use coal_types::config::AuthPolicy;

/// An identity field supplied by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Ip,
    Mac,
    Port,
    Essid,
    Password,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ip => write!(f, "IP address"),
            Self::Mac => write!(f, "MAC address"),
            Self::Port => write!(f, "port"),
            Self::Essid => write!(f, "ESSID"),
            Self::Password => write!(f, "password"),
        }
    }
}

/// The kind of check a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// `aireplay`: IP + ESSID.
    Wireless,
    /// `porthack`: IP + MAC + port.
    Ssh,
    /// `overflow`: IP + MAC + port.
    Ftp,
    /// `aircon`: IP + password.
    Login,
}

/// Accepted literals for one field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRule {
    pub field: Field,
    pub accepted: &'static [&'static str],
    /// Written as a disjunction of literals (always true when unchecked).
    pub disjunctive: bool,
}

impl KeyRule {
    const fn exact(field: Field, value: &'static [&'static str]) -> Self {
        Self {
            field,
            accepted: value,
            disjunctive: false,
        }
    }

    const fn any_of(field: Field, values: &'static [&'static str]) -> Self {
        Self {
            field,
            accepted: values,
            disjunctive: true,
        }
    }

    /// Exact, case-sensitive match against the accepted literals.
    pub fn accepts(&self, supplied: &str) -> bool {
        self.accepted.contains(&supplied)
    }

    /// Whether `supplied` passes this rule under `policy`.
    pub fn passes(&self, supplied: &str, policy: AuthPolicy) -> bool {
        (self.disjunctive && policy == AuthPolicy::LegacyPrimaryOnly) || self.accepts(supplied)
    }
}

/// Identifies a remote device by its IP address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceId(pub &'static str);

impl DeviceId {
    pub fn ip(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for DeviceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// A remote device reachable through `aircon`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Device {
    pub id: DeviceId,
    pub name: &'static str,
    pub listing: ContentKey,
    /// Port scan shown by `nmap` for this address.
    pub scan: Option<ContentKey>,
    /// Whether `snake` is available on this device.
    pub arcade: bool,
}

/// One row of the vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialRecord {
    pub gate: Gate,
    pub primary: KeyRule,
    pub secondary: KeyRule,
    pub tertiary: Option<KeyRule>,
    /// Secret revealed by a successful crack. `None` for logins.
    pub reveals: Option<&'static str>,
    pub device: DeviceId,
}

/// The fields entered for one authentication attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attempt {
    pub primary: String,
    pub secondary: String,
    pub tertiary: Option<String>,
}

impl Attempt {
    /// Every gate is keyed by the target IP.
    pub const PRIMARY_FIELD: Field = Field::Ip;

    pub fn pair(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
            tertiary: None,
        }
    }

    pub fn triple(
        primary: impl Into<String>,
        secondary: impl Into<String>,
        tertiary: impl Into<String>,
    ) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
            tertiary: Some(tertiary.into()),
        }
    }
}

/// A rejected attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("{field} '{supplied}' rejected")]
    Rejected { field: Field, supplied: String },
}

impl AuthError {
    pub fn field(&self) -> Field {
        match self {
            Self::Rejected { field, .. } => *field,
        }
    }

    pub fn supplied(&self) -> &str {
        match self {
            Self::Rejected { supplied, .. } => supplied,
        }
    }
}

// ---------------------------------------------------------------------------
// Static table
// ---------------------------------------------------------------------------

const ZX: DeviceId = DeviceId("735.92.44.64.846");
const HAL: DeviceId = DeviceId("653.67.49.847.46");
const NVB: DeviceId = DeviceId("273.84.845.53.32");
const VB0SE: DeviceId = DeviceId("177.93.84.162.14");
const DESK: DeviceId = DeviceId("31.638.48.35.744");
const ARCADE: DeviceId = DeviceId("98.712.345.63.28");

const SSH_MACS: &[&str] = &[
    "6g:11:hf:9q:mb:pi:97:2i",
    "y3:91:4r:gt:ue:33:7o:p1",
    "00:r1:o8:v7:nq:73:55:o8",
];
const SSH_PORTS: &[&str] = &["1", "2", "3"];

const FTP_MACS: &[&str] = &[
    "lr:5t:io:11:7e:p0:jy:1t",
    "44:te:n7:mp:1q:re:b4:99",
    "cc:45:h7:9b:ar:oo:u7:76",
    "zx:12:5r:yy:pi:yn:44:11",
];
const FTP_PORTS: &[&str] = &["1", "2", "3", "4"];

const fn wireless(
    ip: &'static [&'static str],
    essid: &'static [&'static str],
    secret: &'static str,
    device: DeviceId,
) -> CredentialRecord {
    CredentialRecord {
        gate: Gate::Wireless,
        primary: KeyRule::exact(Field::Ip, ip),
        secondary: KeyRule::exact(Field::Essid, essid),
        tertiary: None,
        reveals: Some(secret),
        device,
    }
}

const fn login(
    ip: &'static [&'static str],
    password: &'static [&'static str],
    device: DeviceId,
) -> CredentialRecord {
    CredentialRecord {
        gate: Gate::Login,
        primary: KeyRule::exact(Field::Ip, ip),
        secondary: KeyRule::exact(Field::Password, password),
        tertiary: None,
        reveals: None,
        device,
    }
}

const RECORDS: &[CredentialRecord] = &[
    wireless(&[ZX.0], &["Zx@P!o33Q7"], "mnQwertrewQnm123", ZX),
    wireless(&[HAL.0], &["Hals_Comp"], "MmkwgUltbara98", HAL),
    wireless(&[NVB.0], &["NVB_271324"], "ddid.No8817994", NVB),
    wireless(&[ARCADE.0], &["RF8_11G4M3"], "AllTheGames911711", ARCADE),
    CredentialRecord {
        gate: Gate::Ssh,
        primary: KeyRule::exact(Field::Ip, &[VB0SE.0]),
        secondary: KeyRule::any_of(Field::Mac, SSH_MACS),
        tertiary: Some(KeyRule::any_of(Field::Port, SSH_PORTS)),
        reveals: Some("Discrom77681E4QR!"),
        device: VB0SE,
    },
    CredentialRecord {
        gate: Gate::Ftp,
        primary: KeyRule::exact(Field::Ip, &[DESK.0]),
        secondary: KeyRule::any_of(Field::Mac, FTP_MACS),
        tertiary: Some(KeyRule::any_of(Field::Port, FTP_PORTS)),
        reveals: Some("tunnelTrain2pltfrm6?!"),
        device: DESK,
    },
    login(&[ZX.0], &["mnQwertrewQnm123"], ZX),
    login(&[HAL.0], &["MmkwgUltbara98"], HAL),
    login(&[NVB.0], &["ddid.No8817994"], NVB),
    login(&[VB0SE.0], &["Discrom77681E4QR!"], VB0SE),
    login(&[DESK.0], &["tunnelTrain2pltfrm6?!"], DESK),
    login(&[ARCADE.0], &["AllTheGames911711"], ARCADE),
];

const DEVICES: &[Device] = &[
    Device {
        id: ZX,
        name: "Zx@P!o33Q7",
        listing: ContentKey::DeviceListing(1),
        scan: None,
        arcade: false,
    },
    Device {
        id: HAL,
        name: "Hal's_Comp",
        listing: ContentKey::DeviceListing(2),
        scan: None,
        arcade: false,
    },
    Device {
        id: NVB,
        name: "NVB_271324",
        listing: ContentKey::DeviceListing(3),
        scan: None,
        arcade: false,
    },
    Device {
        id: VB0SE,
        name: "VB0SE_CORP",
        listing: ContentKey::DeviceListing(4),
        scan: Some(ContentKey::PortScan(1)),
        arcade: false,
    },
    Device {
        id: DESK,
        name: "DESKNo.747",
        listing: ContentKey::DeviceListing(5),
        scan: Some(ContentKey::PortScan(2)),
        arcade: false,
    },
    Device {
        id: ARCADE,
        name: "RF8_11G4M3",
        listing: ContentKey::DeviceListing(6),
        scan: None,
        arcade: true,
    },
];

// ---------------------------------------------------------------------------
// Vault
// ---------------------------------------------------------------------------

/// Read-only credential store.
#[derive(Debug, Clone)]
pub struct Vault {
    records: &'static [CredentialRecord],
    devices: &'static [Device],
}

impl Vault {
    /// The built-in table.
    pub fn standard() -> Self {
        Self {
            records: RECORDS,
            devices: DEVICES,
        }
    }

    pub fn records(&self) -> &'static [CredentialRecord] {
        self.records
    }

    pub fn devices(&self) -> &'static [Device] {
        self.devices
    }

    /// Device with the given id.
    pub fn device(&self, id: DeviceId) -> Option<&'static Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    /// Port scan content for an address, if it has one.
    pub fn scan_for(&self, ip: &str) -> Option<ContentKey> {
        self.devices
            .iter()
            .find(|d| d.id.ip() == ip)
            .and_then(|d| d.scan)
    }

    /// Check `attempt` against the records of `gate`.
    ///
    /// The first record whose primary key matches and whose rules pass
    /// wins. On failure the error names the primary field when no record
    /// has that primary key, otherwise the first failing rule of the first
    /// primary match.
    pub fn authenticate(
        &self,
        gate: Gate,
        attempt: &Attempt,
        policy: AuthPolicy,
    ) -> Result<&'static CredentialRecord, AuthError> {
        let records = self.records;
        let mut first_failure = None;
        for record in records
            .iter()
            .filter(|r| r.gate == gate && r.primary.accepts(&attempt.primary))
        {
            match check_rules(record, attempt, policy) {
                Ok(()) => {
                    log::debug!("{gate:?} accepted {}", attempt.primary);
                    return Ok(record);
                },
                Err(e) if first_failure.is_none() => first_failure = Some(e),
                Err(_) => {},
            }
        }
        let err = first_failure.unwrap_or_else(|| AuthError::Rejected {
            field: Attempt::PRIMARY_FIELD,
            supplied: attempt.primary.clone(),
        });
        log::debug!("{gate:?} rejected: {err}");
        Err(err)
    }
}

impl Default for Vault {
    fn default() -> Self {
        Self::standard()
    }
}

fn check_rules(
    record: &CredentialRecord,
    attempt: &Attempt,
    policy: AuthPolicy,
) -> Result<(), AuthError> {
    let tertiary = attempt.tertiary.as_deref().unwrap_or("");
    let rules = [
        Some((&record.secondary, attempt.secondary.as_str())),
        record.tertiary.as_ref().map(|rule| (rule, tertiary)),
    ];
    for (rule, supplied) in rules.into_iter().flatten() {
        if !rule.passes(supplied, policy) {
            return Err(AuthError::Rejected {
                field: rule.field,
                supplied: supplied.to_string(),
            });
        }
    }
    Ok(())
}
