//! Immutable identifier and default-parameter tables.
//!
//! Stages receive these by reference; nothing here is mutable or lazily
//! initialised.
use crate::model::Convention;

/// An identifier assembled from a base and per-parameter suffixes.
#[derive(Debug)]
pub struct CompositeIdentifier {
    pub base: &'static str,
    pub key_sizes: &'static [(u32, &'static str)],
    pub modes: &'static [(&'static str, &'static str)],
}

impl CompositeIdentifier {
    /// Base plus the key-size and mode suffixes, joined with dots and
    /// skipping empty suffixes. Both parts must be known; when either lookup
    /// misses, the base alone is the answer.
    pub fn compose(&self, key_size: Option<u32>, mode: Option<&str>) -> String {
        let key_suffix = key_size.and_then(|bits| {
            self.key_sizes
                .iter()
                .find(|(b, _)| *b == bits)
                .map(|(_, s)| *s)
        });
        let mode_suffix = mode.and_then(|name| {
            self.modes
                .iter()
                .find(|(m, _)| m.eq_ignore_ascii_case(name))
                .map(|(_, s)| *s)
        });
        match (key_suffix, mode_suffix) {
            (Some(k), Some(m)) => [self.base, k, m]
                .iter()
                .filter(|part| !part.is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join("."),
            _ => self.base.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct IdentifierTables {
    pub by_name: &'static [(&'static str, &'static str)],
    pub aes: CompositeIdentifier,
    pub sha2: &'static [(u32, &'static str)],
    /// SHA-2 truncations that pre-hash with SHA-512.
    pub sha512_truncated: &'static [(u32, &'static str)],
    pub sha3: &'static [(u32, &'static str)],
    pub shake: &'static [(u32, &'static str)],
}

impl IdentifierTables {
    pub fn standard() -> &'static IdentifierTables {
        &STANDARD_IDENTIFIERS
    }

    pub fn lookup(&self, name: &str) -> Option<&'static str> {
        self.by_name
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, oid)| *oid)
    }
}

pub fn size_lookup(table: &[(u32, &'static str)], bits: u32) -> Option<&'static str> {
    table.iter().find(|(b, _)| *b == bits).map(|(_, oid)| *oid)
}

static STANDARD_IDENTIFIERS: IdentifierTables = IdentifierTables {
    by_name: &[
        // ciphers
        ("DES", "1.3.14.3.2.7"),
        ("DESede", "1.2.840.113549.3.7"),
        ("RC2", "1.2.840.113549.3.2"),
        ("RC4", "1.2.840.113549.3.4"),
        ("Blowfish", "1.3.6.1.4.1.3029.1.2"),
        ("Camellia", "1.2.392.200011.61.1.1.1"),
        ("ChaCha20-Poly1305", "1.2.840.113549.1.9.16.3.18"),
        ("RSA", "1.2.840.113549.1.1.1"),
        // digests
        ("MD2", "1.2.840.113549.2.2"),
        ("MD5", "1.2.840.113549.2.5"),
        ("SHA-1", "1.3.14.3.2.26"),
        ("SHA-224", "2.16.840.1.101.3.4.2.4"),
        ("SHA-256", "2.16.840.1.101.3.4.2.1"),
        ("SHA-384", "2.16.840.1.101.3.4.2.2"),
        ("SHA-512", "2.16.840.1.101.3.4.2.3"),
        ("SHA-512/224", "2.16.840.1.101.3.4.2.5"),
        ("SHA-512/256", "2.16.840.1.101.3.4.2.6"),
        ("SHA3-224", "2.16.840.1.101.3.4.2.7"),
        ("SHA3-256", "2.16.840.1.101.3.4.2.8"),
        ("SHA3-384", "2.16.840.1.101.3.4.2.9"),
        ("SHA3-512", "2.16.840.1.101.3.4.2.10"),
        ("SHAKE128", "2.16.840.1.101.3.4.2.11"),
        ("SHAKE256", "2.16.840.1.101.3.4.2.12"),
        // macs
        ("HMAC-SHA1", "1.2.840.113549.2.7"),
        ("HMAC-SHA224", "1.2.840.113549.2.8"),
        ("HMAC-SHA256", "1.2.840.113549.2.9"),
        ("HMAC-SHA384", "1.2.840.113549.2.10"),
        ("HMAC-SHA512", "1.2.840.113549.2.11"),
        // signatures
        ("SHA1withRSA", "1.2.840.113549.1.1.5"),
        ("SHA224withRSA", "1.2.840.113549.1.1.14"),
        ("SHA256withRSA", "1.2.840.113549.1.1.11"),
        ("SHA384withRSA", "1.2.840.113549.1.1.12"),
        ("SHA512withRSA", "1.2.840.113549.1.1.13"),
        ("RSASSA-PSS", "1.2.840.113549.1.1.10"),
        ("SHA1withECDSA", "1.2.840.10045.4.1"),
        ("SHA224withECDSA", "1.2.840.10045.4.3.1"),
        ("SHA256withECDSA", "1.2.840.10045.4.3.2"),
        ("SHA384withECDSA", "1.2.840.10045.4.3.3"),
        ("SHA512withECDSA", "1.2.840.10045.4.3.4"),
        ("SHA1withDSA", "1.2.840.10040.4.3"),
        ("SHA256withDSA", "2.16.840.1.101.3.4.3.2"),
        ("Ed25519", "1.3.101.112"),
        ("Ed448", "1.3.101.113"),
        ("ML-DSA-44", "2.16.840.1.101.3.4.3.17"),
        ("ML-DSA-65", "2.16.840.1.101.3.4.3.18"),
        ("ML-DSA-87", "2.16.840.1.101.3.4.3.19"),
        // key agreement, kem, kdf
        ("DH", "1.2.840.113549.1.3.1"),
        ("ECDH", "1.3.132.1.12"),
        ("X25519", "1.3.101.110"),
        ("X448", "1.3.101.111"),
        ("ML-KEM-512", "2.16.840.1.101.3.4.4.1"),
        ("ML-KEM-768", "2.16.840.1.101.3.4.4.2"),
        ("ML-KEM-1024", "2.16.840.1.101.3.4.4.3"),
        ("PBKDF2", "1.2.840.113549.1.5.12"),
        ("MGF1", "1.2.840.113549.1.1.8"),
        // elliptic curves
        ("EC", "1.2.840.10045.2.1"),
        ("secp256r1", "1.2.840.10045.3.1.7"),
        ("secp384r1", "1.3.132.0.34"),
        ("secp521r1", "1.3.132.0.35"),
        ("secp256k1", "1.3.132.0.10"),
        ("brainpoolP256r1", "1.3.36.3.3.2.8.1.1.7"),
        ("brainpoolP384r1", "1.3.36.3.3.2.8.1.1.11"),
        ("brainpoolP512r1", "1.3.36.3.3.2.8.1.1.13"),
    ],
    aes: CompositeIdentifier {
        base: "2.16.840.1.101.3.4.1",
        key_sizes: &[(128, ""), (192, "2"), (256, "4")],
        modes: &[
            ("ECB", "1"),
            ("CBC", "2"),
            ("OFB", "3"),
            ("CFB", "4"),
            ("KW", "5"),
            ("GCM", "6"),
            ("CCM", "7"),
            ("KWP", "8"),
        ],
    },
    sha2: &[
        (224, "2.16.840.1.101.3.4.2.4"),
        (256, "2.16.840.1.101.3.4.2.1"),
        (384, "2.16.840.1.101.3.4.2.2"),
        (512, "2.16.840.1.101.3.4.2.3"),
    ],
    sha512_truncated: &[
        (224, "2.16.840.1.101.3.4.2.5"),
        (256, "2.16.840.1.101.3.4.2.6"),
    ],
    sha3: &[
        (224, "2.16.840.1.101.3.4.2.7"),
        (256, "2.16.840.1.101.3.4.2.8"),
        (384, "2.16.840.1.101.3.4.2.9"),
        (512, "2.16.840.1.101.3.4.2.10"),
    ],
    shake: &[
        (128, "2.16.840.1.101.3.4.2.11"),
        (256, "2.16.840.1.101.3.4.2.12"),
    ],
};

/// A documented key-length default. A trailing `*` in `name` matches any
/// key name with that prefix.
#[derive(Debug)]
pub struct KeyLengthDefault {
    pub name: &'static str,
    pub bits: u32,
}

impl KeyLengthDefault {
    pub fn applies_to(&self, key_name: &str) -> bool {
        match self.name.strip_suffix('*') {
            Some(prefix) => key_name.starts_with(prefix),
            None => self.name == key_name,
        }
    }
}

#[derive(Debug)]
pub struct ConventionDefaults {
    pub convention: Convention,
    pub key_lengths: &'static [KeyLengthDefault],
}

#[derive(Debug)]
pub struct PssDefaults {
    pub digest: &'static str,
    pub mask_generation: &'static str,
}

#[derive(Debug)]
pub struct DefaultTables {
    pub conventions: &'static [ConventionDefaults],
    pub pss: PssDefaults,
}

impl DefaultTables {
    pub fn standard() -> &'static DefaultTables {
        &STANDARD_DEFAULTS
    }

    pub fn key_length(&self, convention: Convention, key_name: &str) -> Option<u32> {
        self.conventions
            .iter()
            .filter(|c| c.convention == convention)
            .flat_map(|c| c.key_lengths.iter())
            .find(|d| d.applies_to(key_name))
            .map(|d| d.bits)
    }
}

static STANDARD_DEFAULTS: DefaultTables = DefaultTables {
    conventions: &[ConventionDefaults {
        convention: Convention::Jca,
        key_lengths: &[
            KeyLengthDefault { name: "AES", bits: 128 },
            KeyLengthDefault { name: "DES", bits: 56 },
            KeyLengthDefault { name: "DESede", bits: 168 },
            KeyLengthDefault { name: "Blowfish", bits: 128 },
            KeyLengthDefault { name: "RC2", bits: 128 },
            KeyLengthDefault { name: "RC4", bits: 128 },
            KeyLengthDefault { name: "HMAC-SHA*", bits: 256 },
            KeyLengthDefault { name: "RSA", bits: 2048 },
            KeyLengthDefault { name: "DSA", bits: 2048 },
            KeyLengthDefault { name: "DH", bits: 2048 },
            KeyLengthDefault { name: "EC", bits: 256 },
        ],
    }],
    pss: PssDefaults {
        digest: "SHA-1",
        mask_generation: "MGF1",
    },
};

/// Output size of a concrete digest name, in bits.
pub fn digest_output_bits(name: &str) -> Option<u32> {
    let bits = match name {
        "MD2" | "MD4" | "MD5" => 128,
        "SHA-1" | "RIPEMD-160" => 160,
        "SHA-224" | "SHA-512/224" | "SHA3-224" => 224,
        "SHA-256" | "SHA-512/256" | "SHA3-256" | "SM3" => 256,
        "SHA-384" | "SHA3-384" => 384,
        "SHA-512" | "SHA3-512" => 512,
        _ => return None,
    };
    Some(bits)
}
