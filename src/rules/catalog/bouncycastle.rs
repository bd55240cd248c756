//! Bouncy Castle lightweight API (`org.bouncycastle.crypto`).
//!
//! Primitives are composed by constructor injection, so most of the
//! structure comes from parameter dependencies rather than follow-up calls.
use crate::engine::{Action, RawValue, Size, SizeUnit};
use crate::model::Convention;
use crate::rules::{
    CipherKind, DetectionContext, DetectionRule, DetectionRuleBuilder, KeyKind, MethodPattern,
    ParameterPattern, SignatureKind, TypePattern, ValueFactory,
};

const ENGINES: &str = "org.bouncycastle.crypto.engines";
const MODES: &str = "org.bouncycastle.crypto.modes";
const DIGESTS: &str = "org.bouncycastle.crypto.digests";
const MACS: &str = "org.bouncycastle.crypto.macs";
const SIGNERS: &str = "org.bouncycastle.crypto.signers";
const GENERATORS: &str = "org.bouncycastle.crypto.generators";

pub const AES_ENGINE: &str = "bc.engine.aes";
pub const DES_ENGINE: &str = "bc.engine.des";
pub const DESEDE_ENGINE: &str = "bc.engine.desede";
pub const CAMELLIA_ENGINE: &str = "bc.engine.camellia";
pub const CHACHA_ENGINE: &str = "bc.engine.chacha";
pub const RSA_ENGINE: &str = "bc.engine.rsa";
pub const CBC_MODE: &str = "bc.mode.cbc";
pub const CFB_MODE: &str = "bc.mode.cfb";
pub const CTR_MODE: &str = "bc.mode.ctr";
pub const GCM_MODE: &str = "bc.mode.gcm";
pub const CCM_MODE: &str = "bc.mode.ccm";
pub const PADDED_CIPHER: &str = "bc.padded_buffered_block_cipher";
pub const SHA1_DIGEST: &str = "bc.digest.sha1";
pub const SHA256_DIGEST: &str = "bc.digest.sha256";
pub const SHA384_DIGEST: &str = "bc.digest.sha384";
pub const SHA512_DIGEST: &str = "bc.digest.sha512";
pub const SHA512T_DIGEST: &str = "bc.digest.sha512t";
pub const SHA3_DIGEST: &str = "bc.digest.sha3";
pub const SHA3_DEFAULT_DIGEST: &str = "bc.digest.sha3.default";
pub const SHAKE_DIGEST: &str = "bc.digest.shake";
pub const MD5_DIGEST: &str = "bc.digest.md5";
pub const HMAC: &str = "bc.mac.hmac";
pub const CMAC: &str = "bc.mac.cmac";
pub const CMAC_SIZED: &str = "bc.mac.cmac.sized";
pub const GMAC: &str = "bc.mac.gmac";
pub const PSS_SIGNER: &str = "bc.signer.pss";
pub const RSA_DIGEST_SIGNER: &str = "bc.signer.rsa_digest";
pub const ECDSA_SIGNER: &str = "bc.signer.ecdsa";
pub const ED25519_SIGNER: &str = "bc.signer.ed25519";
pub const RSA_KEY_PAIR_GENERATOR: &str = "bc.generator.rsa_key_pair";
pub const KEY_PAIR_GENERATE: &str = "bc.generator.generate_key_pair";

const BLOCK_ENGINES: &[&str] = &[AES_ENGINE, DES_ENGINE, DESEDE_ENGINE, CAMELLIA_ENGINE];
const BLOCK_CIPHERS: &[&str] = &[
    AES_ENGINE,
    DES_ENGINE,
    DESEDE_ENGINE,
    CAMELLIA_ENGINE,
    CBC_MODE,
    CFB_MODE,
    CTR_MODE,
];
const ALL_DIGESTS: &[&str] = &[
    SHA1_DIGEST,
    SHA256_DIGEST,
    SHA384_DIGEST,
    SHA512_DIGEST,
    SHA512T_DIGEST,
    SHA3_DIGEST,
    SHA3_DEFAULT_DIGEST,
    MD5_DIGEST,
];

/// `new X(...)` or the newer `X.newInstance(...)` factory.
fn construct(name: &str, context: DetectionContext, package: &str, class: &str) -> DetectionRuleBuilder {
    DetectionRule::builder(name, Convention::BouncyCastle, context)
        .for_type(TypePattern::exact(format!("{package}.{class}")))
        .method(MethodPattern::one_of(&["<init>", "newInstance"]))
}

fn algorithm(name: &str) -> RawValue {
    RawValue::Algorithm(name.to_string())
}

fn engine_rules() -> Vec<DetectionRule> {
    let block = DetectionContext::Cipher(CipherKind::BlockCipher);
    let engine = |rule: &str, class: &str, alg: &str, context: DetectionContext| {
        construct(rule, context, ENGINES, class)
            .any_arguments()
            .produces(algorithm(alg))
            .entry()
            .build()
    };
    vec![
        engine(AES_ENGINE, "AESEngine", "AES", block),
        engine(DES_ENGINE, "DESEngine", "DES", block),
        engine(DESEDE_ENGINE, "DESedeEngine", "DESede", block),
        engine(CAMELLIA_ENGINE, "CamelliaEngine", "Camellia", block),
        engine(
            CHACHA_ENGINE,
            "ChaChaEngine",
            "ChaCha20",
            DetectionContext::Cipher(CipherKind::StreamCipher),
        ),
        engine(
            RSA_ENGINE,
            "RSAEngine",
            "RSA",
            DetectionContext::Cipher(CipherKind::PublicKeyEncryption),
        ),
    ]
}

fn mode_rules() -> Vec<DetectionRule> {
    let block = DetectionContext::Cipher(CipherKind::BlockCipher);
    let aead = DetectionContext::Cipher(CipherKind::Aead);
    let wrap = |rule: &str, class: &str, mode: &str, context: DetectionContext| {
        construct(rule, context, MODES, class)
            .param(ParameterPattern::any().depending_on(BLOCK_ENGINES))
            .produces(RawValue::Mode(mode.to_string()))
            .entry()
            .build()
    };
    vec![
        wrap(CBC_MODE, "CBCBlockCipher", "CBC", block),
        wrap(CTR_MODE, "SICBlockCipher", "CTR", block),
        wrap(GCM_MODE, "GCMBlockCipher", "GCM", aead),
        wrap(CCM_MODE, "CCMBlockCipher", "CCM", aead),
        // CFBBlockCipher(cipher, bitBlockSize)
        construct(CFB_MODE, block, MODES, "CFBBlockCipher")
            .param(ParameterPattern::any().depending_on(BLOCK_ENGINES))
            .param(ParameterPattern::detect(ValueFactory::BlockSize(SizeUnit::Bit)))
            .produces(RawValue::Mode("CFB".to_string()))
            .entry()
            .build(),
        // Defaults to PKCS7 padding when no padding is passed.
        DetectionRule::builder(PADDED_CIPHER, Convention::BouncyCastle, block)
            .for_type(TypePattern::exact(
                "org.bouncycastle.crypto.paddings.PaddedBufferedBlockCipher",
            ))
            .method(MethodPattern::Constructor)
            .param(ParameterPattern::any().depending_on(BLOCK_CIPHERS))
            .produces(RawValue::Padding("PKCS7".to_string()))
            .entry()
            .build(),
    ]
}

fn digest_rules() -> Vec<DetectionRule> {
    let ctx = DetectionContext::Digest;
    let fixed = |rule: &str, class: &str, alg: &str| {
        construct(rule, ctx, DIGESTS, class)
            .any_arguments()
            .produces(algorithm(alg))
            .entry()
            .build()
    };
    let sized = |rule: &str, class: &str, alg: &str| {
        construct(rule, ctx, DIGESTS, class)
            .param(ParameterPattern::detect(ValueFactory::DigestSize(SizeUnit::Bit)))
            .produces(algorithm(alg))
            .entry()
            .build()
    };
    vec![
        fixed(SHA1_DIGEST, "SHA1Digest", "SHA-1"),
        fixed(SHA256_DIGEST, "SHA256Digest", "SHA-256"),
        fixed(SHA384_DIGEST, "SHA384Digest", "SHA-384"),
        fixed(SHA512_DIGEST, "SHA512Digest", "SHA-512"),
        fixed(MD5_DIGEST, "MD5Digest", "MD5"),
        sized(SHA512T_DIGEST, "SHA512tDigest", "SHA-512/t"),
        sized(SHA3_DIGEST, "SHA3Digest", "SHA3"),
        sized(SHAKE_DIGEST, "SHAKEDigest", "SHAKE"),
        // SHA3Digest() is SHA3-256.
        construct(SHA3_DEFAULT_DIGEST, ctx, DIGESTS, "SHA3Digest")
            .produces(algorithm("SHA3"))
            .produces(RawValue::DigestSize(Size::bits(256)))
            .entry()
            .build(),
    ]
}

fn mac_rules() -> Vec<DetectionRule> {
    let ctx = DetectionContext::Mac;
    vec![
        construct(HMAC, ctx, MACS, "HMac")
            .param(ParameterPattern::any().depending_on(ALL_DIGESTS))
            .produces(algorithm("HMAC"))
            .entry()
            .build(),
        construct(CMAC, ctx, MACS, "CMac")
            .param(ParameterPattern::any().depending_on(BLOCK_CIPHERS))
            .produces(algorithm("CMAC"))
            .entry()
            .build(),
        // CMac(cipher, macSizeInBits)
        construct(CMAC_SIZED, ctx, MACS, "CMac")
            .param(ParameterPattern::any().depending_on(BLOCK_CIPHERS))
            .param(ParameterPattern::detect(ValueFactory::MacSize(SizeUnit::Bit)))
            .produces(algorithm("CMAC"))
            .entry()
            .build(),
        construct(GMAC, ctx, MACS, "GMac")
            .param(ParameterPattern::any().depending_on(&[GCM_MODE]))
            .produces(algorithm("GMAC"))
            .entry()
            .build(),
    ]
}

fn signer_rules() -> Vec<DetectionRule> {
    let generic = DetectionContext::Signature(SignatureKind::Generic);
    let pss = DetectionContext::Signature(SignatureKind::Probabilistic);
    vec![
        // PSSSigner(cipher, digest, saltLength)
        construct(PSS_SIGNER, pss, SIGNERS, "PSSSigner")
            .param(ParameterPattern::any().depending_on(&[RSA_ENGINE]))
            .param(ParameterPattern::any().depending_on(ALL_DIGESTS))
            .param(ParameterPattern::detect(ValueFactory::SaltSize(SizeUnit::Byte)))
            .produces(algorithm("RSASSA-PSS"))
            .entry()
            .build(),
        construct(RSA_DIGEST_SIGNER, generic, SIGNERS, "RSADigestSigner")
            .param(ParameterPattern::any().depending_on(ALL_DIGESTS))
            .produces(algorithm("RSA"))
            .entry()
            .build(),
        construct(ECDSA_SIGNER, generic, SIGNERS, "ECDSASigner")
            .any_arguments()
            .produces(algorithm("ECDSA"))
            .entry()
            .build(),
        construct(ED25519_SIGNER, generic, SIGNERS, "Ed25519Signer")
            .any_arguments()
            .produces(algorithm("Ed25519"))
            .entry()
            .build(),
    ]
}

fn generator_rules() -> Vec<DetectionRule> {
    let pair = DetectionContext::Key(KeyKind::Pair);
    let generator = format!("{GENERATORS}.RSAKeyPairGenerator");
    vec![
        construct(RSA_KEY_PAIR_GENERATOR, pair, GENERATORS, "RSAKeyPairGenerator")
            .any_arguments()
            .produces(algorithm("RSA"))
            .then(&[KEY_PAIR_GENERATE])
            .entry()
            .build(),
        DetectionRule::builder(KEY_PAIR_GENERATE, Convention::BouncyCastle, pair)
            .for_type(TypePattern::exact(generator))
            .named("generateKeyPair")
            .any_arguments()
            .produces(RawValue::Action(Action::Generate))
            .build(),
    ]
}

pub fn rules() -> Vec<DetectionRule> {
    let mut rules = engine_rules();
    rules.extend(mode_rules());
    rules.extend(digest_rules());
    rules.extend(mac_rules());
    rules.extend(signer_rules());
    rules.extend(generator_rules());
    rules
}
