//! Port presets and the `"80,443,8000-8100"` list syntax.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use tracing::warn;

use crate::error::PortParseError;

pub const WEB_PORTS: &[u16] = &[80, 443, 3000, 8080, 8081, 8443];
pub const ADMIN_PORTS: &[u16] = &[135, 139, 445, 1433, 3389, 5985, 5986];
pub const TOP20_PORTS: &[u16] = &[
    21, 22, 23, 25, 53, 80, 110, 111, 135, 139, 143, 443, 445, 993, 995, 1723, 3306, 3389, 5900,
    8080,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortPreset {
    Web,
    Admin,
    Top20,
}

impl PortPreset {
    pub const ALL: [PortPreset; 3] = [PortPreset::Web, PortPreset::Admin, PortPreset::Top20];

    pub fn name(&self) -> &'static str {
        match self {
            PortPreset::Web => "web",
            PortPreset::Admin => "admin",
            PortPreset::Top20 => "top20",
        }
    }

    pub fn ports(&self) -> &'static [u16] {
        match self {
            PortPreset::Web => WEB_PORTS,
            PortPreset::Admin => ADMIN_PORTS,
            PortPreset::Top20 => TOP20_PORTS,
        }
    }

    /// Case-insensitive lookup by preset name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|preset| preset.name() == name)
    }

    /// The preset whose port list equals `ports`, element for element.
    pub fn matching(ports: &[u16]) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.ports() == ports)
    }
}

impl fmt::Display for PortPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ports: Vec<String> = self.ports().iter().map(u16::to_string).collect();
        write!(f, "{} (Ports: {})", self.name(), ports.join(", "))
    }
}

/// Ordered list of ports to probe. Duplicates and order are kept as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortList(Vec<u16>);

impl PortList {
    /// Parses a preset name or a custom list.
    ///
    /// Tokens that do not parse are logged and skipped, so the result may be
    /// empty.
    pub fn parse(input: &str) -> Self {
        if let Some(preset) = PortPreset::from_name(input) {
            return Self::from(preset);
        }

        let mut ports: Vec<u16> = Vec::new();
        for token in input.split(',') {
            match parse_token(token) {
                Ok(parsed) => ports.extend(parsed),
                Err(e) => warn!("{e}"),
            }
        }
        Self(ports)
    }

    pub fn preset(&self) -> Option<PortPreset> {
        PortPreset::matching(&self.0)
    }
}

impl From<PortPreset> for PortList {
    fn from(preset: PortPreset) -> Self {
        Self(preset.ports().to_vec())
    }
}

impl Deref for PortList {
    type Target = [u16];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for PortList {
    type Err = PortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ports = Self::parse(s);
        if ports.is_empty() {
            return Err(PortParseError::Empty(s.to_string()));
        }
        Ok(ports)
    }
}

/// Parses one comma-separated token: a single port or an inclusive `start-end` range.
pub fn parse_token(token: &str) -> Result<Vec<u16>, PortParseError> {
    let token = token.trim();

    let Some((start, end)) = token.split_once('-') else {
        return parse_port(token, token).map(|port| vec![port]);
    };

    let start = parse_port(start, token)?;
    let end = parse_port(end, token)?;
    if start > end {
        return Err(PortParseError::ReversedRange(token.to_string()));
    }
    Ok((start..=end).collect())
}

fn parse_port(s: &str, token: &str) -> Result<u16, PortParseError> {
    let value: u32 = s
        .trim()
        .parse()
        .map_err(|_| PortParseError::InvalidToken(token.to_string()))?;

    match u16::try_from(value) {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(PortParseError::OutOfRange(token.to_string())),
    }
}

/// Report file name for a port scan: `open-<preset>ports.txt` when the list
/// is a preset, otherwise `open-ports-<min>-<max>.txt`.
pub fn report_file_name(ports: &[u16]) -> String {
    if let Some(preset) = PortPreset::matching(ports) {
        return format!("open-{}ports.txt", preset.name());
    }

    match (ports.iter().min(), ports.iter().max()) {
        (Some(min), Some(max)) => format!("open-ports-{min}-{max}.txt"),
        _ => String::from("open-unknownports.txt"),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
