use serde::{Deserialize, Serialize};

/// Closed tag for every cryptographic concept a canonical node can represent.
///
/// Declaration order is also the child ordering used by snapshots, so the
/// algorithm-like kinds come first, then keys, parameters and finally the
/// functionality markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Kind {
    // Algorithms
    Algorithm,
    Cipher,
    BlockCipher,
    StreamCipher,
    AuthenticatedEncryption,
    PublicKeyEncryption,
    KeyWrap,
    Mac,
    MessageDigest,
    ExtendableOutputFunction,
    Signature,
    ProbabilisticSignatureScheme,
    KeyAgreement,
    KeyDerivationFunction,
    PasswordBasedKeyDerivationFunction,
    PasswordBasedEncryption,
    KeyEncapsulationMechanism,
    EllipticCurveAlgorithm,
    EllipticCurve,
    MaskGenerationFunction,
    PseudorandomNumberGenerator,

    // Keys
    Key,
    SecretKey,
    PrivateKey,
    PublicKey,

    // Parameters
    KeyLength,
    BlockSize,
    DigestSize,
    TagLength,
    SaltLength,
    NonceLength,
    IterationCount,
    Mode,
    Padding,
    Oid,
    ParameterSetIdentifier,

    // Functionality markers
    Encrypt,
    Decrypt,
    Sign,
    Verify,
    Digest,
    Tag,
    KeyGeneration,
    KeyDerivation,
    KeyAgreementFunction,
    Encapsulate,
    Decapsulate,
    Wrap,
    Unwrap,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Algorithm => "algorithm",
            Self::Cipher => "cipher",
            Self::BlockCipher => "block_cipher",
            Self::StreamCipher => "stream_cipher",
            Self::AuthenticatedEncryption => "authenticated_encryption",
            Self::PublicKeyEncryption => "public_key_encryption",
            Self::KeyWrap => "key_wrap",
            Self::Mac => "mac",
            Self::MessageDigest => "message_digest",
            Self::ExtendableOutputFunction => "extendable_output_function",
            Self::Signature => "signature",
            Self::ProbabilisticSignatureScheme => "probabilistic_signature_scheme",
            Self::KeyAgreement => "key_agreement",
            Self::KeyDerivationFunction => "key_derivation_function",
            Self::PasswordBasedKeyDerivationFunction => "password_based_key_derivation_function",
            Self::PasswordBasedEncryption => "password_based_encryption",
            Self::KeyEncapsulationMechanism => "key_encapsulation_mechanism",
            Self::EllipticCurveAlgorithm => "elliptic_curve_algorithm",
            Self::EllipticCurve => "elliptic_curve",
            Self::MaskGenerationFunction => "mask_generation_function",
            Self::PseudorandomNumberGenerator => "pseudorandom_number_generator",
            Self::Key => "key",
            Self::SecretKey => "secret_key",
            Self::PrivateKey => "private_key",
            Self::PublicKey => "public_key",
            Self::KeyLength => "key_length",
            Self::BlockSize => "block_size",
            Self::DigestSize => "digest_size",
            Self::TagLength => "tag_length",
            Self::SaltLength => "salt_length",
            Self::NonceLength => "nonce_length",
            Self::IterationCount => "iteration_count",
            Self::Mode => "mode",
            Self::Padding => "padding",
            Self::Oid => "oid",
            Self::ParameterSetIdentifier => "parameter_set_identifier",
            Self::Encrypt => "encrypt",
            Self::Decrypt => "decrypt",
            Self::Sign => "sign",
            Self::Verify => "verify",
            Self::Digest => "digest",
            Self::Tag => "tag",
            Self::KeyGeneration => "key_generation",
            Self::KeyDerivation => "key_derivation",
            Self::KeyAgreementFunction => "key_agreement_function",
            Self::Encapsulate => "encapsulate",
            Self::Decapsulate => "decapsulate",
            Self::Wrap => "wrap",
            Self::Unwrap => "unwrap",
        }
    }

    /// Kinds reported as standalone assets, never nested in one another.
    pub fn is_entry_point(&self) -> bool {
        matches!(self, Self::PrivateKey | Self::PublicKey)
    }

    pub fn is_key(&self) -> bool {
        matches!(
            self,
            Self::Key | Self::SecretKey | Self::PrivateKey | Self::PublicKey
        )
    }

    pub fn is_functionality(&self) -> bool {
        matches!(
            self,
            Self::Encrypt
                | Self::Decrypt
                | Self::Sign
                | Self::Verify
                | Self::Digest
                | Self::Tag
                | Self::KeyGeneration
                | Self::KeyDerivation
                | Self::KeyAgreementFunction
                | Self::Encapsulate
                | Self::Decapsulate
                | Self::Wrap
                | Self::Unwrap
        )
    }

    pub fn is_cipher_shaped(&self) -> bool {
        matches!(
            self,
            Self::BlockCipher | Self::StreamCipher | Self::AuthenticatedEncryption
        )
    }

    /// Size-like parameter kinds whose display name is a bit count.
    pub fn is_size(&self) -> bool {
        matches!(
            self,
            Self::KeyLength
                | Self::BlockSize
                | Self::DigestSize
                | Self::TagLength
                | Self::SaltLength
                | Self::NonceLength
        )
    }

    pub fn is_parameter(&self) -> bool {
        self.is_size()
            || matches!(
                self,
                Self::IterationCount
                    | Self::Mode
                    | Self::Padding
                    | Self::Oid
                    | Self::ParameterSetIdentifier
            )
    }

    /// Everything that names an algorithm or a curve: not a key, a parameter
    /// or a marker.
    pub fn is_algorithm(&self) -> bool {
        !self.is_key() && !self.is_parameter() && !self.is_functionality()
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
