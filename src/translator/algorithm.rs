//! Algorithm-name grammar.
//!
//! API strings such as `AES/CFB8/NoPadding`, `SHA256withRSA/PSS`,
//! `PBKDF2WithHmacSHA256` or `AES_256` are decomposed into a canonical node
//! with one child per parameter the name carries.
use crate::model::{Forest, Kind, Location, NodeId, PLACEHOLDER};
use crate::utils::{normalize_name, split_trailing_digits};

const DIGESTS: &[(&str, Kind, &str)] = &[
    ("SHA", Kind::MessageDigest, "SHA-1"),
    ("SHA1", Kind::MessageDigest, "SHA-1"),
    ("SHA224", Kind::MessageDigest, "SHA-224"),
    ("SHA256", Kind::MessageDigest, "SHA-256"),
    ("SHA384", Kind::MessageDigest, "SHA-384"),
    ("SHA512", Kind::MessageDigest, "SHA-512"),
    ("SHA512/224", Kind::MessageDigest, "SHA-512/224"),
    ("SHA512/256", Kind::MessageDigest, "SHA-512/256"),
    ("SHA3224", Kind::MessageDigest, "SHA3-224"),
    ("SHA3256", Kind::MessageDigest, "SHA3-256"),
    ("SHA3384", Kind::MessageDigest, "SHA3-384"),
    ("SHA3512", Kind::MessageDigest, "SHA3-512"),
    ("SHA2", Kind::MessageDigest, "SHA2"),
    ("SHA3", Kind::MessageDigest, "SHA3"),
    ("MD2", Kind::MessageDigest, "MD2"),
    ("MD4", Kind::MessageDigest, "MD4"),
    ("MD5", Kind::MessageDigest, "MD5"),
    ("RIPEMD160", Kind::MessageDigest, "RIPEMD-160"),
    ("SM3", Kind::MessageDigest, "SM3"),
    ("SHAKE", Kind::ExtendableOutputFunction, "SHAKE"),
    ("SHAKE128", Kind::ExtendableOutputFunction, "SHAKE128"),
    ("SHAKE256", Kind::ExtendableOutputFunction, "SHAKE256"),
];

const CIPHERS: &[(&str, Kind, &str)] = &[
    ("AES", Kind::BlockCipher, "AES"),
    ("DES", Kind::BlockCipher, "DES"),
    ("DESEDE", Kind::BlockCipher, "DESede"),
    ("TRIPLEDES", Kind::BlockCipher, "DESede"),
    ("3DES", Kind::BlockCipher, "DESede"),
    ("TDEA", Kind::BlockCipher, "DESede"),
    ("BLOWFISH", Kind::BlockCipher, "Blowfish"),
    ("CAMELLIA", Kind::BlockCipher, "Camellia"),
    ("ARIA", Kind::BlockCipher, "ARIA"),
    ("SEED", Kind::BlockCipher, "SEED"),
    ("RC2", Kind::BlockCipher, "RC2"),
    ("RC5", Kind::BlockCipher, "RC5"),
    ("IDEA", Kind::BlockCipher, "IDEA"),
    ("CAST5", Kind::BlockCipher, "CAST5"),
    ("CAST128", Kind::BlockCipher, "CAST5"),
    ("TWOFISH", Kind::BlockCipher, "Twofish"),
    ("SM4", Kind::BlockCipher, "SM4"),
    ("RC4", Kind::StreamCipher, "RC4"),
    ("ARC4", Kind::StreamCipher, "RC4"),
    ("ARCFOUR", Kind::StreamCipher, "RC4"),
    ("CHACHA20", Kind::StreamCipher, "ChaCha20"),
    ("SALSA20", Kind::StreamCipher, "Salsa20"),
    ("CHACHA20POLY1305", Kind::AuthenticatedEncryption, "ChaCha20-Poly1305"),
    ("RSA", Kind::PublicKeyEncryption, "RSA"),
    ("ELGAMAL", Kind::PublicKeyEncryption, "ElGamal"),
];

const KEY_AGREEMENTS: &[(&str, &str)] = &[
    ("DH", "DH"),
    ("DIFFIEHELLMAN", "DH"),
    ("ECDH", "ECDH"),
    ("ECMQV", "ECMQV"),
    ("XDH", "XDH"),
    ("X25519", "X25519"),
    ("X448", "X448"),
];

const SIGNATURE_SCHEMES: &[(&str, &str)] = &[
    ("ECDSA", "ECDSA"),
    ("DSA", "DSA"),
    ("EDDSA", "EdDSA"),
    ("ED25519", "Ed25519"),
    ("ED448", "Ed448"),
    ("SM2", "SM2"),
];

const CURVES: &[(&str, &str)] = &[
    ("SECP256R1", "secp256r1"),
    ("P256", "secp256r1"),
    ("NISTP256", "secp256r1"),
    ("PRIME256V1", "secp256r1"),
    ("SECP384R1", "secp384r1"),
    ("P384", "secp384r1"),
    ("NISTP384", "secp384r1"),
    ("SECP521R1", "secp521r1"),
    ("P521", "secp521r1"),
    ("NISTP521", "secp521r1"),
    ("SECP256K1", "secp256k1"),
    ("CURVE25519", "Curve25519"),
    ("CURVE448", "Curve448"),
    ("BRAINPOOLP256R1", "brainpoolP256r1"),
    ("BRAINPOOLP384R1", "brainpoolP384r1"),
    ("BRAINPOOLP512R1", "brainpoolP512r1"),
];

const PRNGS: &[(&str, &str)] = &[
    ("SHA1PRNG", "SHA1PRNG"),
    ("DRBG", "DRBG"),
    ("HASHDRBG", "DRBG"),
    ("NATIVEPRNG", "NativePRNG"),
    ("NATIVEPRNGBLOCKING", "NativePRNG"),
    ("NATIVEPRNGNONBLOCKING", "NativePRNG"),
    ("WINDOWSPRNG", "Windows-PRNG"),
];

fn lookup<'t, T: Copy>(table: &'t [(&'static str, T)], key: &str) -> Option<T> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn lookup3(table: &[(&str, Kind, &'static str)], key: &str) -> Option<(Kind, &'static str)> {
    table
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, kind, name)| (*kind, *name))
}

fn strip_suffix_ignore_case<'s>(s: &'s str, suffix: &str) -> Option<&'s str> {
    let split = s.len().checked_sub(suffix.len())?;
    if s.is_char_boundary(split) && s[split..].eq_ignore_ascii_case(suffix) {
        Some(&s[..split])
    } else {
        None
    }
}

fn find_ignore_case(s: &str, needle: &str) -> Option<usize> {
    s.to_ascii_uppercase().find(&needle.to_ascii_uppercase())
}

/// Compact digest spelling used inside composite names: `SHA-256` becomes
/// `SHA256`, `SHA3-256` is left alone.
fn compact_digest(name: &str) -> String {
    match name.strip_prefix("SHA-") {
        Some(rest) => format!("SHA{rest}"),
        None => name.to_string(),
    }
}

/// `SHA256withRSA`, `SHA3-256withECDSA`.
pub fn signature_name(digest: &str, algorithm: &str) -> String {
    format!("{}with{}", compact_digest(digest), algorithm)
}

struct Builder<'f> {
    forest: &'f mut Forest,
    location: &'f Location,
}

impl Builder<'_> {
    fn node(&mut self, kind: Kind, name: impl Into<String>) -> NodeId {
        self.forest.add_node(kind, name, self.location.clone())
    }

    fn child(&mut self, parent: NodeId, kind: Kind, name: impl Into<String>) -> NodeId {
        self.forest.add_child(parent, kind, name, self.location.clone())
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.forest.insert_or_merge(parent, child);
    }

    fn digest(&mut self, normalized: &str) -> Option<NodeId> {
        if normalized == "SHA512/T" {
            let family = self.node(Kind::MessageDigest, "SHA2");
            self.child(family, Kind::MessageDigest, "SHA-512");
            return Some(family);
        }
        let (kind, name) = lookup3(DIGESTS, normalized)?;
        Some(self.node(kind, name))
    }

    /// Cipher family, optionally suffixed with a key size (`AES256`).
    fn cipher(&mut self, normalized: &str) -> Option<NodeId> {
        if let Some((kind, name)) = lookup3(CIPHERS, normalized) {
            return Some(self.node(kind, name));
        }
        let (family, bits) = split_trailing_digits(normalized);
        let bits = bits?;
        let (kind, name) = lookup3(CIPHERS, family)?;
        if kind != Kind::BlockCipher {
            return None;
        }
        let id = self.node(kind, name);
        self.child(id, Kind::KeyLength, bits.to_string());
        Some(id)
    }

    fn key_wrap(&mut self, normalized: &str) -> Option<NodeId> {
        let (name, mode) = match normalized {
            "AESWRAP" | "AESKW" => ("AESWrap", "KW"),
            "AESWRAPPAD" | "AESKWP" => ("AESWrapPad", "KWP"),
            _ => return None,
        };
        let wrap = self.node(Kind::KeyWrap, name);
        let aes = self.child(wrap, Kind::BlockCipher, "AES");
        self.child(aes, Kind::Mode, mode);
        Some(wrap)
    }

    fn mac(&mut self, normalized: &str) -> Option<NodeId> {
        if let Some(rest) = normalized.strip_prefix("HMAC") {
            if rest.is_empty() {
                return Some(self.node(Kind::Mac, "HMAC"));
            }
            let digest = self.digest(rest)?;
            let name = format!("HMAC-{}", compact_digest(self.forest.name(digest)));
            let mac = self.node(Kind::Mac, name);
            self.attach(mac, digest);
            return Some(mac);
        }
        let (name, cipher) = match normalized {
            "CMAC" => ("CMAC", None),
            "AESCMAC" => ("CMAC", Some("AES")),
            "GMAC" => ("GMAC", None),
            "AESGMAC" => ("GMAC", Some("AES")),
            "POLY1305" => ("Poly1305", None),
            "KMAC128" => ("KMAC128", None),
            "KMAC256" => ("KMAC256", None),
            "SIPHASH" => ("SipHash", None),
            _ => return None,
        };
        let mac = self.node(Kind::Mac, name);
        if let Some(cipher) = cipher {
            self.child(mac, Kind::BlockCipher, cipher);
        }
        Some(mac)
    }

    fn kdf(&mut self, normalized: &str) -> Option<NodeId> {
        if let Some(rest) = normalized.strip_prefix("PBKDF2") {
            let kdf = self.node(Kind::PasswordBasedKeyDerivationFunction, "PBKDF2");
            let prf = rest.strip_prefix("WITH").unwrap_or(rest);
            if !prf.is_empty() {
                let mac = self.mac(prf)?;
                self.attach(kdf, mac);
            }
            return Some(kdf);
        }
        if let Some(rest) = normalized.strip_prefix("HKDF") {
            let kdf = self.node(Kind::KeyDerivationFunction, "HKDF");
            let prf = rest.strip_prefix("WITH").unwrap_or(rest);
            if !prf.is_empty() {
                let prf = if prf.starts_with("HMAC") {
                    prf.to_string()
                } else {
                    format!("HMAC{prf}")
                };
                let mac = self.mac(&prf)?;
                self.attach(kdf, mac);
            }
            return Some(kdf);
        }
        match normalized {
            "SCRYPT" => Some(self.node(Kind::PasswordBasedKeyDerivationFunction, "scrypt")),
            "ARGON2" | "ARGON2ID" => {
                Some(self.node(Kind::PasswordBasedKeyDerivationFunction, "Argon2id"))
            }
            _ => None,
        }
    }

    /// `PBEWith<digest|hmac>And<cipher>`.
    fn pbe(&mut self, original: &str, normalized: &str) -> Option<NodeId> {
        let rest = normalized.strip_prefix("PBEWITH")?;
        let split = rest.find("AND")?;
        let (prf, cipher) = (&rest[..split], &rest[split + 3..]);

        let pbe = self.node(Kind::PasswordBasedEncryption, original.trim());
        let prf = if prf.starts_with("HMAC") {
            self.mac(prf)
        } else {
            self.digest(prf)
        };
        if let Some(prf) = prf {
            self.attach(pbe, prf);
        }
        if let Some(cipher) = self.cipher(cipher) {
            self.attach(pbe, cipher);
        }
        Some(pbe)
    }

    fn signature(&mut self, original: &str) -> Option<NodeId> {
        let mut base = original.trim();
        let mut pss = false;
        for suffix in ["/PSS", "andMGF1"] {
            if let Some(stripped) = strip_suffix_ignore_case(base, suffix) {
                base = stripped;
                pss = true;
            }
        }
        let split = find_ignore_case(base, "with")?;
        let digest_part = normalize_name(&base[..split]);
        let algorithm_part = normalize_name(&base[split + 4..]);
        if algorithm_part.is_empty() {
            return None;
        }

        let digest = if digest_part == "NONE" {
            None
        } else {
            Some(self.digest(&digest_part)?)
        };
        let algorithm = match algorithm_part.as_str() {
            "RSA" => self.node(Kind::PublicKeyEncryption, "RSA"),
            other => {
                let name = lookup(SIGNATURE_SCHEMES, other).unwrap_or(other);
                self.node(Kind::Algorithm, name)
            }
        };

        let algorithm_name = self.forest.name(algorithm).to_string();
        let name = match digest {
            Some(d) => signature_name(self.forest.name(d), &algorithm_name),
            None => format!("NONEwith{algorithm_name}"),
        };
        let (kind, name) = if pss {
            (Kind::ProbabilisticSignatureScheme, format!("{name}/PSS"))
        } else {
            (Kind::Signature, name)
        };

        let signature = self.node(kind, name);
        self.attach(signature, algorithm);
        if let Some(digest) = digest {
            if pss {
                let mgf = self.child(signature, Kind::MaskGenerationFunction, "MGF1");
                let mgf_digest = self.forest.deep_copy(digest);
                self.attach(mgf, mgf_digest);
            }
            self.attach(signature, digest);
        }
        Some(signature)
    }

    fn signature_scheme(&mut self, normalized: &str) -> Option<NodeId> {
        if matches!(normalized, "RSASSAPSS" | "PSS") {
            let pss = self.node(Kind::ProbabilisticSignatureScheme, "RSASSA-PSS");
            self.child(pss, Kind::PublicKeyEncryption, "RSA");
            return Some(pss);
        }
        if let Some(set) = normalized.strip_prefix("MLDSA") {
            return Some(self.parameterized(Kind::Signature, "ML-DSA", set));
        }
        let name = lookup(SIGNATURE_SCHEMES, normalized)?;
        Some(self.node(Kind::Signature, name))
    }

    fn kem(&mut self, normalized: &str) -> Option<NodeId> {
        let set = normalized
            .strip_prefix("MLKEM")
            .or_else(|| normalized.strip_prefix("KYBER"))?;
        Some(self.parameterized(Kind::KeyEncapsulationMechanism, "ML-KEM", set))
    }

    /// `ML-KEM-768` style names: family plus parameter set.
    fn parameterized(&mut self, kind: Kind, family: &str, set: &str) -> NodeId {
        if set.is_empty() || !set.chars().all(|c| c.is_ascii_digit()) {
            return self.node(kind, family);
        }
        let id = self.node(kind, format!("{family}-{set}"));
        self.child(id, Kind::ParameterSetIdentifier, set);
        id
    }

    fn prng(&mut self, normalized: &str) -> Option<NodeId> {
        let name = lookup(PRNGS, normalized)?;
        let id = self.node(Kind::PseudorandomNumberGenerator, name);
        if name == "SHA1PRNG" {
            self.child(id, Kind::MessageDigest, "SHA-1");
        }
        Some(id)
    }

    /// `ALG/MODE/PADDING`.
    fn transformation(&mut self, original: &str) -> Option<NodeId> {
        let mut parts = original.split('/').map(str::trim);
        let algorithm = parts.next()?;
        let cipher = self.build(algorithm)?;

        if let Some(mode) = parts.next() {
            if self.forest.kind(cipher) != Kind::PublicKeyEncryption {
                if let Some(mode) = self.mode(mode) {
                    self.attach(cipher, mode);
                }
            }
        }
        if let Some(padding) = parts.next() {
            if let Some(padding) = self.padding(padding) {
                self.attach(cipher, padding);
            }
        }
        Some(cipher)
    }

    fn mode(&mut self, name: &str) -> Option<NodeId> {
        let normalized = normalize_name(name);
        if normalized.is_empty() || normalized == "NONE" {
            return None;
        }
        let (mode_name, bits) = split_trailing_digits(&normalized);
        if !mode_name.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        let mode = self.node(Kind::Mode, mode_name);
        if let Some(bits) = bits {
            self.child(mode, Kind::BlockSize, bits.to_string());
        }
        Some(mode)
    }

    fn padding(&mut self, name: &str) -> Option<NodeId> {
        let name = name.trim();
        let base = strip_suffix_ignore_case(name, "Padding").unwrap_or(name);
        if base.is_empty() || base.eq_ignore_ascii_case("No") || base.eq_ignore_ascii_case("NONE") {
            return None;
        }

        let normalized = normalize_name(base);
        if let Some(rest) = normalized.strip_prefix("OAEP") {
            let oaep = self.node(Kind::Padding, "OAEP");
            // OAEPWith<digest>AndMGF1; a bare OAEP uses SHA-1 throughout
            let digest = rest
                .strip_prefix("WITH")
                .and_then(|r| r.strip_suffix("ANDMGF1"))
                .unwrap_or("SHA1");
            if let Some(digest) = self.digest(digest) {
                self.attach(oaep, digest);
            }
            let mgf = self.child(oaep, Kind::MaskGenerationFunction, "MGF1");
            self.child(mgf, Kind::MessageDigest, "SHA-1");
            return Some(oaep);
        }
        Some(self.node(Kind::Padding, base))
    }

    fn build(&mut self, name: &str) -> Option<NodeId> {
        let original = name.trim();
        if original.is_empty() {
            return None;
        }
        let normalized = normalize_name(original);

        if original.contains('/') {
            if let Some(digest) = self.digest(&normalized) {
                return Some(digest);
            }
            if strip_suffix_ignore_case(original, "/PSS").is_some() {
                return self.signature(original);
            }
            return self.transformation(original);
        }

        if normalized.starts_with("PBEWITH") {
            return self.pbe(original, &normalized);
        }
        if let Some(kdf) = self.kdf(&normalized) {
            return Some(kdf);
        }
        if normalized.contains("WITH") {
            return self.signature(original);
        }

        self.mac(&normalized)
            .or_else(|| self.digest(&normalized))
            .or_else(|| self.key_wrap(&normalized))
            .or_else(|| self.cipher(&normalized))
            .or_else(|| {
                lookup(KEY_AGREEMENTS, normalized.as_str())
                    .map(|n| self.node(Kind::KeyAgreement, n))
            })
            .or_else(|| self.signature_scheme(&normalized))
            .or_else(|| self.kem(&normalized))
            .or_else(|| self.prng(&normalized))
            .or_else(|| match normalized.as_str() {
                "EC" => Some(self.node(Kind::EllipticCurveAlgorithm, "EC")),
                "MGF1" => Some(self.node(Kind::MaskGenerationFunction, "MGF1")),
                _ => None,
            })
            .or_else(|| {
                lookup(CURVES, normalized.as_str()).map(|n| self.node(Kind::EllipticCurve, n))
            })
    }
}

/// Builds the canonical node an algorithm name denotes. The node is
/// detached; `None` when the name is not recognised.
pub fn build(forest: &mut Forest, name: &str, location: &Location) -> Option<NodeId> {
    Builder { forest, location }.build(name)
}

/// Like [`build`], but only keeps the node when `accepts` admits its kind.
/// A rejected node stays unreachable in the arena.
pub fn build_if(
    forest: &mut Forest,
    name: &str,
    location: &Location,
    accepts: impl Fn(Kind) -> bool,
) -> Option<NodeId> {
    let id = build(forest, name, location)?;
    accepts(forest.kind(id)).then_some(id)
}

pub fn mode(forest: &mut Forest, name: &str, location: &Location) -> Option<NodeId> {
    Builder { forest, location }.mode(name)
}

pub fn padding(forest: &mut Forest, name: &str, location: &Location) -> Option<NodeId> {
    Builder { forest, location }.padding(name)
}

/// Unrecognised curve names are kept verbatim.
pub fn curve(forest: &mut Forest, name: &str, location: &Location) -> NodeId {
    let canonical = lookup(CURVES, normalize_name(name).as_str()).unwrap_or(name.trim());
    forest.add_node(Kind::EllipticCurve, canonical, location.clone())
}

/// A placeholder node of `kind`, for wrappers whose algorithm is supplied by
/// a nested detection.
pub fn placeholder(forest: &mut Forest, kind: Kind, location: &Location) -> NodeId {
    forest.add_node(kind, PLACEHOLDER, location.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Asset;
    use pretty_assertions::assert_eq;

    fn parse(name: &str) -> Option<Asset> {
        let mut forest = Forest::new();
        build(&mut forest, name, &Location::default()).map(|id| forest.asset(id))
    }

    fn names(asset: &Asset) -> Vec<(Kind, String)> {
        asset
            .children
            .iter()
            .map(|c| (c.kind, c.name.clone()))
            .collect()
    }

    #[test]
    fn test_transformation_with_block_size() {
        let aes = parse("AES/CFB8/NoPadding").unwrap();
        assert_eq!(aes.kind, Kind::BlockCipher);
        assert_eq!(aes.name, "AES");
        assert_eq!(aes.path(&[Kind::Mode]).unwrap().name, "CFB");
        assert_eq!(aes.path(&[Kind::Mode, Kind::BlockSize]).unwrap().name, "8");
        assert!(!aes.has_child(Kind::Padding));
    }

    #[test]
    fn test_key_size_suffix() {
        let aes = parse("AES_256").unwrap();
        assert_eq!(names(&aes), vec![(Kind::KeyLength, "256".to_string())]);
    }

    #[test]
    fn test_rsa_oaep_transformation() {
        let rsa = parse("RSA/ECB/OAEPWithSHA-256AndMGF1Padding").unwrap();
        assert_eq!(rsa.kind, Kind::PublicKeyEncryption);
        assert!(!rsa.has_child(Kind::Mode));
        let oaep = rsa.child(Kind::Padding).unwrap();
        assert_eq!(oaep.name, "OAEP");
        assert_eq!(oaep.child_name(Kind::MessageDigest), Some("SHA-256"));
        assert_eq!(
            oaep.path(&[Kind::MaskGenerationFunction, Kind::MessageDigest])
                .unwrap()
                .name,
            "SHA-1"
        );
    }

    #[test]
    fn test_pkcs5_padding() {
        let des = parse("DESede/CBC/PKCS5Padding").unwrap();
        assert_eq!(des.name, "DESede");
        assert_eq!(des.child_name(Kind::Padding), Some("PKCS5"));
    }

    #[test]
    fn test_signature_names() {
        let sig = parse("SHA256withECDSA").unwrap();
        assert_eq!(sig.kind, Kind::Signature);
        assert_eq!(sig.name, "SHA256withECDSA");
        assert_eq!(sig.child_name(Kind::MessageDigest), Some("SHA-256"));
        assert_eq!(sig.child_name(Kind::Algorithm), Some("ECDSA"));

        let pss = parse("SHA384withRSA/PSS").unwrap();
        assert_eq!(pss.kind, Kind::ProbabilisticSignatureScheme);
        assert_eq!(
            pss.path(&[Kind::MaskGenerationFunction, Kind::MessageDigest])
                .unwrap()
                .name,
            "SHA-384"
        );
    }

    #[test]
    fn test_digest_names() {
        assert_eq!(parse("SHA-256").unwrap().name, "SHA-256");
        assert_eq!(parse("sha3-512").unwrap().name, "SHA3-512");
        assert_eq!(parse("SHA-512/224").unwrap().name, "SHA-512/224");
        let xof = parse("SHAKE128").unwrap();
        assert_eq!(xof.kind, Kind::ExtendableOutputFunction);
    }

    #[test]
    fn test_truncated_sha512_family() {
        let family = parse("SHA-512/t").unwrap();
        assert_eq!(family.name, "SHA2");
        assert_eq!(family.child_name(Kind::MessageDigest), Some("SHA-512"));
    }

    #[test]
    fn test_mac_and_kdf_names() {
        let mac = parse("HmacSHA256").unwrap();
        assert_eq!(mac.name, "HMAC-SHA256");
        assert_eq!(mac.child_name(Kind::MessageDigest), Some("SHA-256"));

        let kdf = parse("PBKDF2WithHmacSHA512").unwrap();
        assert_eq!(kdf.kind, Kind::PasswordBasedKeyDerivationFunction);
        assert_eq!(
            kdf.path(&[Kind::Mac, Kind::MessageDigest]).unwrap().name,
            "SHA-512"
        );
    }

    #[test]
    fn test_pbe_name() {
        let pbe = parse("PBEWithHmacSHA256AndAES_128").unwrap();
        assert_eq!(pbe.kind, Kind::PasswordBasedEncryption);
        assert_eq!(pbe.child_name(Kind::Mac), Some("HMAC-SHA256"));
        assert_eq!(
            pbe.path(&[Kind::BlockCipher, Kind::KeyLength]).unwrap().name,
            "128"
        );
    }

    #[test]
    fn test_kem_parameter_set() {
        let kem = parse("ML-KEM-768").unwrap();
        assert_eq!(kem.name, "ML-KEM-768");
        assert_eq!(kem.child_name(Kind::ParameterSetIdentifier), Some("768"));
    }

    #[test]
    fn test_unknown_name() {
        assert!(parse("Rot13").is_none());
        assert!(parse("").is_none());
    }

    #[test]
    fn test_signature_name_spelling() {
        assert_eq!(signature_name("SHA-256", "RSA"), "SHA256withRSA");
        assert_eq!(signature_name("SHA3-256", "ECDSA"), "SHA3-256withECDSA");
    }
}
