//! Error types for netlink transport and record decoding.

use std::fmt;
use std::io;

/// Result type for linetface operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Identity of the interface a decode error belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkId {
    /// Interface index from the message header.
    pub ifindex: u32,
    /// Interface name, when the message carried one.
    pub ifname: Option<String>,
}

impl LinkId {
    /// Build an identity from an index and an optional name.
    pub fn new(ifindex: u32, ifname: Option<&str>) -> Self {
        Self {
            ifindex,
            ifname: ifname.map(str::to_owned),
        }
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.ifname {
            Some(name) => write!(f, "ifindex {} ({})", self.ifindex, name),
            None => write!(f, "ifindex {}", self.ifindex),
        }
    }
}

/// Errors that can occur while querying or decoding netlink data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error from socket operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Kernel returned an error code.
    #[error("kernel error: {message} (errno {errno})")]
    Kernel {
        /// The errno value from the kernel.
        errno: i32,
        /// Human-readable error message.
        message: String,
    },

    /// Message was truncated.
    #[error("message truncated: expected {expected} bytes, got {actual}")]
    Truncated {
        /// Expected message length.
        expected: usize,
        /// Actual bytes received.
        actual: usize,
    },

    /// Invalid message format.
    #[error("invalid message: {0}")]
    InvalidMessage(String),

    /// Parse error.
    #[error("parse error: {0}")]
    Parse(String),

    /// Interface not found.
    #[error("interface not found: {name}")]
    InterfaceNotFound {
        /// The interface name that was not found.
        name: String,
    },

    /// A closed-set code has no mapped member.
    #[error("unknown {domain} value: {value}")]
    UnknownEnumValue {
        /// Which enumeration was consulted (e.g. "link type").
        domain: &'static str,
        /// The raw code that failed to map.
        value: u32,
    },

    /// A link message lacks a required attribute.
    #[error("malformed link message for {link}: missing {missing}")]
    MalformedLinkMessage {
        /// The offending interface.
        link: LinkId,
        /// The missing field.
        missing: &'static str,
    },

    /// An address message lacks a required attribute.
    #[error("malformed address message for ifindex {ifindex}: missing {missing}")]
    MalformedAddressMessage {
        /// Interface index from the address header.
        ifindex: u32,
        /// The missing field.
        missing: &'static str,
    },

    /// The IPv6 address generation mode code is outside the known set.
    #[error("unrecognized inet6 address generation mode {mode:#x} on {link}")]
    UnrecognizedGenerationMode {
        /// The offending interface.
        link: LinkId,
        /// The raw IFLA_INET6_ADDR_GEN_MODE value.
        mode: u8,
    },

    /// A decode error raised while processing a specific interface.
    #[error("{link}: {source}")]
    InLink {
        /// The interface being decoded.
        link: LinkId,
        /// The underlying error.
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a kernel error from an errno value.
    pub fn from_errno(errno: i32) -> Self {
        let message = io::Error::from_raw_os_error(-errno).to_string();
        Self::Kernel {
            errno: -errno,
            message,
        }
    }

    /// Attach interface identity to errors that do not carry it already.
    ///
    /// Registry failures know nothing about the message they came from, so
    /// they are wrapped. Errors that already name their interface are
    /// returned unchanged.
    pub fn in_link(self, link: &LinkId) -> Self {
        match self {
            Self::UnknownEnumValue { .. } | Self::Parse(_) => Self::InLink {
                link: link.clone(),
                source: Box::new(self),
            },
            other => other,
        }
    }

    /// Strip any interface context and return the underlying error.
    pub fn root(&self) -> &Error {
        match self {
            Self::InLink { source, .. } => source.root(),
            other => other,
        }
    }

    /// Check if this is an unmapped enumeration code.
    pub fn is_unknown_enum(&self) -> bool {
        matches!(self.root(), Self::UnknownEnumValue { .. })
    }

    /// Check if this is a "not found" error (ENOENT, ENODEV, etc.).
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Kernel { errno, .. } => matches!(*errno, 2 | 19), // ENOENT=2, ENODEV=19
            Self::InterfaceNotFound { .. } => true,
            _ => false,
        }
    }

    /// Check if this is a permission error (EPERM, EACCES).
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::Kernel { errno, .. } => matches!(*errno, 1 | 13), // EPERM=1, EACCES=13
            Self::Io(e) => e.kind() == io::ErrorKind::PermissionDenied,
            _ => false,
        }
    }

    /// Get the errno value if this is a kernel error.
    pub fn errno(&self) -> Option<i32> {
        match self {
            Self::Kernel { errno, .. } => Some(*errno),
            _ => None,
        }
    }
}
