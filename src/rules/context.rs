use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CipherKind {
    Generic,
    BlockCipher,
    StreamCipher,
    Aead,
    Wrap,
    Pbe,
    PublicKeyEncryption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SignatureKind {
    Generic,
    Probabilistic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KeyKind {
    Secret,
    Private,
    Public,
    Pair,
}

/// Semantic context a detection rule is declared under. The translator
/// dispatches on it to pick the canonical kind for each raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DetectionContext {
    Cipher(CipherKind),
    Signature(SignatureKind),
    Mac,
    Digest,
    Key(KeyKind),
    KeyAgreement,
    KeyDerivation,
    Prng,
    Kem,
    AlgorithmParameter,
}

impl DetectionContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cipher(CipherKind::Generic) => "cipher",
            Self::Cipher(CipherKind::BlockCipher) => "cipher.block",
            Self::Cipher(CipherKind::StreamCipher) => "cipher.stream",
            Self::Cipher(CipherKind::Aead) => "cipher.aead",
            Self::Cipher(CipherKind::Wrap) => "cipher.wrap",
            Self::Cipher(CipherKind::Pbe) => "cipher.pbe",
            Self::Cipher(CipherKind::PublicKeyEncryption) => "cipher.public_key",
            Self::Signature(SignatureKind::Generic) => "signature",
            Self::Signature(SignatureKind::Probabilistic) => "signature.pss",
            Self::Mac => "mac",
            Self::Digest => "digest",
            Self::Key(KeyKind::Secret) => "key.secret",
            Self::Key(KeyKind::Private) => "key.private",
            Self::Key(KeyKind::Public) => "key.public",
            Self::Key(KeyKind::Pair) => "key.pair",
            Self::KeyAgreement => "key_agreement",
            Self::KeyDerivation => "key_derivation",
            Self::Prng => "prng",
            Self::Kem => "kem",
            Self::AlgorithmParameter => "algorithm_parameter",
        }
    }
}

impl std::fmt::Display for DetectionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
