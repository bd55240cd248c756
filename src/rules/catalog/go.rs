//! Go standard library `crypto/...` packages and `golang.org/x/crypto`.
//!
//! Receiver types are import paths; a package-level function call is
//! reported with the package as its receiver.
use crate::engine::{Action, RawValue, SizeUnit};
use crate::model::Convention;
use crate::rules::{
    CipherKind, DetectionContext, DetectionRule, DetectionRuleBuilder, KeyKind, MethodPattern,
    ParameterPattern, SignatureKind, TypePattern, ValueFactory,
};

pub const AES_NEW_CIPHER: &str = "go.aes.new_cipher";
pub const DES_NEW_CIPHER: &str = "go.des.new_cipher";
pub const DES_NEW_TRIPLE_DES: &str = "go.des.new_triple_des_cipher";
pub const CIPHER_NEW_GCM: &str = "go.cipher.new_gcm";
pub const CIPHER_NEW_CBC_ENCRYPTER: &str = "go.cipher.new_cbc_encrypter";
pub const CIPHER_NEW_CBC_DECRYPTER: &str = "go.cipher.new_cbc_decrypter";
pub const CIPHER_NEW_CTR: &str = "go.cipher.new_ctr";
pub const SHA1: &str = "go.sha1";
pub const SHA224: &str = "go.sha256.224";
pub const SHA256: &str = "go.sha256";
pub const SHA384: &str = "go.sha512.384";
pub const SHA512: &str = "go.sha512";
pub const SHA3_256: &str = "go.sha3.256";
pub const MD5: &str = "go.md5";
pub const HMAC_NEW: &str = "go.hmac.new";
pub const PBKDF2_KEY: &str = "go.x.pbkdf2.key";
pub const STD_PBKDF2_KEY: &str = "go.pbkdf2.key";
pub const HKDF_NEW: &str = "go.x.hkdf.new";
pub const RSA_GENERATE_KEY: &str = "go.rsa.generate_key";
pub const ECDSA_GENERATE_KEY: &str = "go.ecdsa.generate_key";
pub const ELLIPTIC_P256: &str = "go.elliptic.p256";
pub const ELLIPTIC_P384: &str = "go.elliptic.p384";
pub const ELLIPTIC_P521: &str = "go.elliptic.p521";
pub const ECDH_X25519: &str = "go.ecdh.x25519";
pub const ED25519_SIGN: &str = "go.ed25519.sign";

const BLOCKS: &[&str] = &[AES_NEW_CIPHER, DES_NEW_CIPHER, DES_NEW_TRIPLE_DES];
const HASHES: &[&str] = &[SHA1, SHA224, SHA256, SHA384, SHA512, SHA3_256, MD5];
const CURVES: &[&str] = &[ELLIPTIC_P256, ELLIPTIC_P384, ELLIPTIC_P521];

fn call(name: &str, context: DetectionContext, package: &str, functions: &[&str]) -> DetectionRuleBuilder {
    let method = match functions {
        [single] => MethodPattern::named(*single),
        many => MethodPattern::one_of(many),
    };
    DetectionRule::builder(name, Convention::GoStdlib, context)
        .for_type(TypePattern::exact(package))
        .method(method)
}

fn algorithm(name: &str) -> RawValue {
    RawValue::Algorithm(name.to_string())
}

fn cipher_rules() -> Vec<DetectionRule> {
    let block = DetectionContext::Cipher(CipherKind::BlockCipher);
    let block_mode = |rule: &str, function: &str, mode: &str, action: Action| {
        call(rule, block, "crypto/cipher", &[function])
            .param(ParameterPattern::any().depending_on(BLOCKS))
            .param(ParameterPattern::any())
            .produces(RawValue::Mode(mode.to_string()))
            .produces(RawValue::Action(action))
            .entry()
            .build()
    };
    vec![
        call(AES_NEW_CIPHER, block, "crypto/aes", &["NewCipher"])
            .any_arguments()
            .produces(algorithm("AES"))
            .entry()
            .build(),
        call(DES_NEW_CIPHER, block, "crypto/des", &["NewCipher"])
            .any_arguments()
            .produces(algorithm("DES"))
            .entry()
            .build(),
        call(DES_NEW_TRIPLE_DES, block, "crypto/des", &["NewTripleDESCipher"])
            .any_arguments()
            .produces(algorithm("DESede"))
            .entry()
            .build(),
        call(
            CIPHER_NEW_GCM,
            DetectionContext::Cipher(CipherKind::Aead),
            "crypto/cipher",
            &["NewGCM"],
        )
        .param(ParameterPattern::any().depending_on(BLOCKS))
        .produces(RawValue::Mode("GCM".to_string()))
        .entry()
        .build(),
        block_mode(CIPHER_NEW_CBC_ENCRYPTER, "NewCBCEncrypter", "CBC", Action::Encrypt),
        block_mode(CIPHER_NEW_CBC_DECRYPTER, "NewCBCDecrypter", "CBC", Action::Decrypt),
        block_mode(CIPHER_NEW_CTR, "NewCTR", "CTR", Action::Encrypt),
    ]
}

fn hash_rules() -> Vec<DetectionRule> {
    let hash = |rule: &str, package: &str, functions: &[&str], alg: &str| {
        call(rule, DetectionContext::Digest, package, functions)
            .any_arguments()
            .produces(algorithm(alg))
            .entry()
            .build()
    };
    vec![
        hash(SHA1, "crypto/sha1", &["New", "Sum"], "SHA-1"),
        hash(SHA224, "crypto/sha256", &["New224", "Sum224"], "SHA-224"),
        hash(SHA256, "crypto/sha256", &["New", "Sum256"], "SHA-256"),
        hash(SHA384, "crypto/sha512", &["New384", "Sum384"], "SHA-384"),
        hash(SHA512, "crypto/sha512", &["New", "Sum512"], "SHA-512"),
        hash(SHA3_256, "crypto/sha3", &["New256", "Sum256"], "SHA3-256"),
        hash(MD5, "crypto/md5", &["New", "Sum"], "MD5"),
    ]
}

fn mac_and_kdf_rules() -> Vec<DetectionRule> {
    let kdf = DetectionContext::KeyDerivation;
    vec![
        // hmac.New(h func() hash.Hash, key []byte)
        call(HMAC_NEW, DetectionContext::Mac, "crypto/hmac", &["New"])
            .param(ParameterPattern::any().depending_on(HASHES))
            .param(ParameterPattern::any())
            .produces(algorithm("HMAC"))
            .entry()
            .build(),
        // pbkdf2.Key(password, salt, iter, keyLen, h)
        call(PBKDF2_KEY, kdf, "golang.org/x/crypto/pbkdf2", &["Key"])
            .param(ParameterPattern::any())
            .param(ParameterPattern::any())
            .param(ParameterPattern::detect(ValueFactory::IterationCount))
            .param(ParameterPattern::detect(ValueFactory::KeySize(SizeUnit::Byte)))
            .param(ParameterPattern::any().depending_on(HASHES))
            .produces(algorithm("PBKDF2"))
            .entry()
            .build(),
        // pbkdf2.Key(h, password, salt, iter, keyLen)
        call(STD_PBKDF2_KEY, kdf, "crypto/pbkdf2", &["Key"])
            .param(ParameterPattern::any().depending_on(HASHES))
            .param(ParameterPattern::any())
            .param(ParameterPattern::any())
            .param(ParameterPattern::detect(ValueFactory::IterationCount))
            .param(ParameterPattern::detect(ValueFactory::KeySize(SizeUnit::Byte)))
            .produces(algorithm("PBKDF2"))
            .entry()
            .build(),
        call(HKDF_NEW, kdf, "golang.org/x/crypto/hkdf", &["New", "Key"])
            .any_arguments()
            .produces(algorithm("HKDF"))
            .entry()
            .build(),
    ]
}

fn key_rules() -> Vec<DetectionRule> {
    let private = DetectionContext::Key(KeyKind::Private);
    let curve = |rule: &str, function: &str, name: &str| {
        call(rule, DetectionContext::AlgorithmParameter, "crypto/elliptic", &[function])
            .any_arguments()
            .produces(RawValue::Curve(name.to_string()))
            .build()
    };
    vec![
        // rsa.GenerateKey(random, bits)
        call(RSA_GENERATE_KEY, private, "crypto/rsa", &["GenerateKey"])
            .param(ParameterPattern::any())
            .param(ParameterPattern::detect(ValueFactory::KeySize(SizeUnit::Bit)))
            .produces(algorithm("RSA"))
            .produces(RawValue::Action(Action::Generate))
            .entry()
            .build(),
        // ecdsa.GenerateKey(curve, random)
        call(ECDSA_GENERATE_KEY, private, "crypto/ecdsa", &["GenerateKey"])
            .param(ParameterPattern::any().depending_on(CURVES))
            .param(ParameterPattern::any())
            .produces(algorithm("EC"))
            .produces(RawValue::Action(Action::Generate))
            .entry()
            .build(),
        curve(ELLIPTIC_P256, "P256", "P-256"),
        curve(ELLIPTIC_P384, "P384", "P-384"),
        curve(ELLIPTIC_P521, "P521", "P-521"),
        call(ECDH_X25519, DetectionContext::KeyAgreement, "crypto/ecdh", &["X25519"])
            .any_arguments()
            .produces(algorithm("X25519"))
            .entry()
            .build(),
        call(
            ED25519_SIGN,
            DetectionContext::Signature(SignatureKind::Generic),
            "crypto/ed25519",
            &["Sign"],
        )
        .any_arguments()
        .produces(algorithm("Ed25519"))
        .produces(RawValue::Action(Action::Sign))
        .entry()
        .build(),
    ]
}

pub fn rules() -> Vec<DetectionRule> {
    let mut rules = cipher_rules();
    rules.extend(hash_rules());
    rules.extend(mac_and_kdf_rules());
    rules.extend(key_rules());
    rules
}
