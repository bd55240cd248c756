//! Java Cryptography Architecture (`javax.crypto`, `java.security`).
use crate::engine::{Action, RawValue, SizeUnit};
use crate::model::Convention;
use crate::rules::{
    CipherKind, DetectionContext, DetectionRule, KeyKind, MethodPattern, ParameterPattern,
    SignatureKind, TypePattern, ValueFactory,
};

const CIPHER: &str = "javax.crypto.Cipher";
const SECRET_KEY_SPEC: &str = "javax.crypto.spec.SecretKeySpec";
const GCM_PARAMETER_SPEC: &str = "javax.crypto.spec.GCMParameterSpec";
const MESSAGE_DIGEST: &str = "java.security.MessageDigest";
const MAC: &str = "javax.crypto.Mac";
const SIGNATURE: &str = "java.security.Signature";
const PSS_PARAMETER_SPEC: &str = "java.security.spec.PSSParameterSpec";
const KEY_GENERATOR: &str = "javax.crypto.KeyGenerator";
const KEY_PAIR_GENERATOR: &str = "java.security.KeyPairGenerator";
const EC_GEN_PARAMETER_SPEC: &str = "java.security.spec.ECGenParameterSpec";
const KEY_AGREEMENT: &str = "javax.crypto.KeyAgreement";
const SECRET_KEY_FACTORY: &str = "javax.crypto.SecretKeyFactory";
const PBE_KEY_SPEC: &str = "javax.crypto.spec.PBEKeySpec";
const SECURE_RANDOM: &str = "java.security.SecureRandom";
const KEM: &str = "javax.crypto.KEM";

pub const CIPHER_GET_INSTANCE: &str = "jca.cipher.get_instance";
pub const CIPHER_INIT: &str = "jca.cipher.init";
pub const CIPHER_INIT_WITH_SPEC: &str = "jca.cipher.init.spec";
pub const CIPHER_INIT_WITH_SPEC_AND_RANDOM: &str = "jca.cipher.init.spec_random";
pub const CIPHER_WRAP: &str = "jca.cipher.wrap";
pub const CIPHER_UNWRAP: &str = "jca.cipher.unwrap";
pub const CIPHER_DO_FINAL: &str = "jca.cipher.do_final";
pub const SECRET_KEY: &str = "jca.secret_key_spec";
pub const SECRET_KEY_WITH_RANGE: &str = "jca.secret_key_spec.range";
pub const GCM_SPEC: &str = "jca.gcm_parameter_spec";
pub const DIGEST_GET_INSTANCE: &str = "jca.message_digest.get_instance";
pub const DIGEST_DIGEST: &str = "jca.message_digest.digest";
pub const MAC_GET_INSTANCE: &str = "jca.mac.get_instance";
pub const MAC_INIT: &str = "jca.mac.init";
pub const MAC_DO_FINAL: &str = "jca.mac.do_final";
pub const SIGNATURE_GET_INSTANCE: &str = "jca.signature.get_instance";
pub const SIGNATURE_INIT_SIGN: &str = "jca.signature.init_sign";
pub const SIGNATURE_INIT_VERIFY: &str = "jca.signature.init_verify";
pub const SIGNATURE_SIGN: &str = "jca.signature.sign";
pub const SIGNATURE_VERIFY: &str = "jca.signature.verify";
pub const SIGNATURE_SET_PARAMETER: &str = "jca.signature.set_parameter";
pub const PSS_SPEC: &str = "jca.pss_parameter_spec";
pub const PSS_SPEC_SALT_ONLY: &str = "jca.pss_parameter_spec.salt";
pub const KEY_GENERATOR_GET_INSTANCE: &str = "jca.key_generator.get_instance";
pub const KEY_GENERATOR_INIT: &str = "jca.key_generator.init";
pub const KEY_GENERATOR_INIT_RANDOM: &str = "jca.key_generator.init.random";
pub const KEY_GENERATOR_GENERATE: &str = "jca.key_generator.generate_key";
pub const KEY_PAIR_GENERATOR_GET_INSTANCE: &str = "jca.key_pair_generator.get_instance";
pub const KEY_PAIR_GENERATOR_INITIALIZE: &str = "jca.key_pair_generator.initialize";
pub const KEY_PAIR_GENERATOR_INITIALIZE_SPEC: &str = "jca.key_pair_generator.initialize.spec";
pub const KEY_PAIR_GENERATOR_GENERATE: &str = "jca.key_pair_generator.generate_key_pair";
pub const EC_GEN_SPEC: &str = "jca.ec_gen_parameter_spec";
pub const KEY_AGREEMENT_GET_INSTANCE: &str = "jca.key_agreement.get_instance";
pub const KEY_AGREEMENT_GENERATE_SECRET: &str = "jca.key_agreement.generate_secret";
pub const SECRET_KEY_FACTORY_GET_INSTANCE: &str = "jca.secret_key_factory.get_instance";
pub const SECRET_KEY_FACTORY_GENERATE: &str = "jca.secret_key_factory.generate_secret";
pub const PBE_SPEC: &str = "jca.pbe_key_spec";
pub const PBE_SPEC_NO_LENGTH: &str = "jca.pbe_key_spec.no_length";
pub const SECURE_RANDOM_GET_INSTANCE: &str = "jca.secure_random.get_instance";
pub const KEM_GET_INSTANCE: &str = "jca.kem.get_instance";
pub const KEM_NEW_ENCAPSULATOR: &str = "jca.kem.new_encapsulator";
pub const KEM_NEW_DECAPSULATOR: &str = "jca.kem.new_decapsulator";

const KEY_SOURCES: &[&str] = &[SECRET_KEY, SECRET_KEY_WITH_RANGE];

fn rule(name: &str, context: DetectionContext, type_name: &str) -> crate::rules::DetectionRuleBuilder {
    DetectionRule::builder(name, Convention::Jca, context).for_type(TypePattern::exact(type_name))
}

/// `getInstance(algorithm)` and `getInstance(algorithm, provider)`.
fn get_instance(
    name: &str,
    type_name: &str,
    context: DetectionContext,
    follow_ups: &[&str],
) -> [DetectionRule; 2] {
    let base = |rule_name: String| {
        DetectionRule::builder(rule_name, Convention::Jca, context)
            .for_type(TypePattern::exact(type_name))
            .named("getInstance")
            .param(ParameterPattern::detect(ValueFactory::Algorithm))
    };
    [
        base(name.to_string()).then(follow_ups).entry().build(),
        base(format!("{name}.provider"))
            .param(ParameterPattern::any())
            .then(follow_ups)
            .entry()
            .build(),
    ]
}

fn action(name: &str, context: DetectionContext, type_name: &str, method: &str, action: Action) -> DetectionRule {
    rule(name, context, type_name)
        .named(method)
        .any_arguments()
        .produces(RawValue::Action(action))
        .build()
}

fn cipher_rules() -> Vec<DetectionRule> {
    let ctx = DetectionContext::Cipher(CipherKind::Generic);
    let mut rules: Vec<DetectionRule> = get_instance(
        CIPHER_GET_INSTANCE,
        CIPHER,
        ctx,
        &[
            CIPHER_INIT,
            CIPHER_INIT_WITH_SPEC,
            CIPHER_INIT_WITH_SPEC_AND_RANDOM,
            CIPHER_WRAP,
            CIPHER_UNWRAP,
            CIPHER_DO_FINAL,
        ],
    )
    .into();

    let init = |name: &str| {
        rule(name, ctx, CIPHER)
            .named("init")
            .param(ParameterPattern::detect(ValueFactory::OperationMode))
            .param(ParameterPattern::any().depending_on(KEY_SOURCES))
    };
    rules.push(init(CIPHER_INIT).build());
    rules.push(
        init(CIPHER_INIT_WITH_SPEC)
            .param(ParameterPattern::any().depending_on(&[GCM_SPEC]))
            .build(),
    );
    rules.push(
        init(CIPHER_INIT_WITH_SPEC_AND_RANDOM)
            .param(ParameterPattern::any().depending_on(&[GCM_SPEC]))
            .param(ParameterPattern::any())
            .build(),
    );
    rules.push(action(CIPHER_WRAP, ctx, CIPHER, "wrap", Action::Wrap));
    rules.push(action(CIPHER_UNWRAP, ctx, CIPHER, "unwrap", Action::Unwrap));
    // The operation was fixed by init; doFinal is only evidence of use.
    rules.push(rule(CIPHER_DO_FINAL, ctx, CIPHER).named("doFinal").any_arguments().build());

    rules.push(
        rule(GCM_SPEC, DetectionContext::AlgorithmParameter, GCM_PARAMETER_SPEC)
            .method(MethodPattern::Constructor)
            .param(ParameterPattern::detect(ValueFactory::TagSize(SizeUnit::Bit)))
            .param(ParameterPattern::any())
            .build(),
    );
    rules
}

fn key_rules() -> Vec<DetectionRule> {
    let secret = DetectionContext::Key(KeyKind::Secret);
    let pair = DetectionContext::Key(KeyKind::Pair);
    let mut rules = vec![
        rule(SECRET_KEY, secret, SECRET_KEY_SPEC)
            .method(MethodPattern::Constructor)
            .param(ParameterPattern::any())
            .param(ParameterPattern::detect(ValueFactory::Algorithm))
            .entry()
            .build(),
        rule(SECRET_KEY_WITH_RANGE, secret, SECRET_KEY_SPEC)
            .method(MethodPattern::Constructor)
            .param(ParameterPattern::any())
            .param(ParameterPattern::any())
            .param(ParameterPattern::any())
            .param(ParameterPattern::detect(ValueFactory::Algorithm))
            .entry()
            .build(),
    ];

    rules.extend(get_instance(
        KEY_GENERATOR_GET_INSTANCE,
        KEY_GENERATOR,
        secret,
        &[
            KEY_GENERATOR_INIT,
            KEY_GENERATOR_INIT_RANDOM,
            KEY_GENERATOR_GENERATE,
        ],
    ));
    rules.push(
        rule(KEY_GENERATOR_INIT, secret, KEY_GENERATOR)
            .named("init")
            .param(ParameterPattern::detect(ValueFactory::KeySize(SizeUnit::Bit)))
            .build(),
    );
    rules.push(
        rule(KEY_GENERATOR_INIT_RANDOM, secret, KEY_GENERATOR)
            .named("init")
            .param(ParameterPattern::detect(ValueFactory::KeySize(SizeUnit::Bit)))
            .param(ParameterPattern::any())
            .build(),
    );
    rules.push(action(
        KEY_GENERATOR_GENERATE,
        secret,
        KEY_GENERATOR,
        "generateKey",
        Action::Generate,
    ));

    rules.extend(get_instance(
        KEY_PAIR_GENERATOR_GET_INSTANCE,
        KEY_PAIR_GENERATOR,
        pair,
        &[
            KEY_PAIR_GENERATOR_INITIALIZE,
            KEY_PAIR_GENERATOR_INITIALIZE_SPEC,
            KEY_PAIR_GENERATOR_GENERATE,
        ],
    ));
    rules.push(
        rule(KEY_PAIR_GENERATOR_INITIALIZE, pair, KEY_PAIR_GENERATOR)
            .named("initialize")
            .param(ParameterPattern::detect(ValueFactory::KeySize(SizeUnit::Bit)))
            .build(),
    );
    rules.push(
        rule(KEY_PAIR_GENERATOR_INITIALIZE_SPEC, pair, KEY_PAIR_GENERATOR)
            .named("initialize")
            .param(ParameterPattern::any().depending_on(&[EC_GEN_SPEC]))
            .build(),
    );
    rules.push(action(
        KEY_PAIR_GENERATOR_GENERATE,
        pair,
        KEY_PAIR_GENERATOR,
        "generateKeyPair",
        Action::Generate,
    ));
    rules.push(
        rule(EC_GEN_SPEC, DetectionContext::AlgorithmParameter, EC_GEN_PARAMETER_SPEC)
            .method(MethodPattern::Constructor)
            .param(ParameterPattern::detect(ValueFactory::Curve))
            .build(),
    );
    rules
}

fn digest_and_mac_rules() -> Vec<DetectionRule> {
    let mut rules: Vec<DetectionRule> = get_instance(
        DIGEST_GET_INSTANCE,
        MESSAGE_DIGEST,
        DetectionContext::Digest,
        &[DIGEST_DIGEST],
    )
    .into();
    rules.push(action(
        DIGEST_DIGEST,
        DetectionContext::Digest,
        MESSAGE_DIGEST,
        "digest",
        Action::Hash,
    ));

    rules.extend(get_instance(
        MAC_GET_INSTANCE,
        MAC,
        DetectionContext::Mac,
        &[MAC_INIT, MAC_DO_FINAL],
    ));
    rules.push(
        rule(MAC_INIT, DetectionContext::Mac, MAC)
            .named("init")
            .param(ParameterPattern::any().depending_on(KEY_SOURCES))
            .build(),
    );
    rules.push(action(
        MAC_DO_FINAL,
        DetectionContext::Mac,
        MAC,
        "doFinal",
        Action::Tag,
    ));
    rules
}

fn signature_rules() -> Vec<DetectionRule> {
    let ctx = DetectionContext::Signature(SignatureKind::Generic);
    let pss = DetectionContext::Signature(SignatureKind::Probabilistic);
    let mut rules: Vec<DetectionRule> = get_instance(
        SIGNATURE_GET_INSTANCE,
        SIGNATURE,
        ctx,
        &[
            SIGNATURE_INIT_SIGN,
            SIGNATURE_INIT_VERIFY,
            SIGNATURE_SIGN,
            SIGNATURE_VERIFY,
            SIGNATURE_SET_PARAMETER,
        ],
    )
    .into();
    rules.push(action(SIGNATURE_INIT_SIGN, ctx, SIGNATURE, "initSign", Action::Sign));
    rules.push(action(
        SIGNATURE_INIT_VERIFY,
        ctx,
        SIGNATURE,
        "initVerify",
        Action::Verify,
    ));
    rules.push(action(SIGNATURE_SIGN, ctx, SIGNATURE, "sign", Action::Sign));
    rules.push(action(SIGNATURE_VERIFY, ctx, SIGNATURE, "verify", Action::Verify));
    rules.push(
        rule(SIGNATURE_SET_PARAMETER, ctx, SIGNATURE)
            .named("setParameter")
            .param(ParameterPattern::any().depending_on(&[PSS_SPEC, PSS_SPEC_SALT_ONLY]))
            .build(),
    );

    // PSSParameterSpec(mdName, mgfName, mgfSpec, saltLen, trailerField)
    rules.push(
        rule(PSS_SPEC, pss, PSS_PARAMETER_SPEC)
            .method(MethodPattern::Constructor)
            .param(ParameterPattern::detect(ValueFactory::Algorithm))
            .param(ParameterPattern::detect(ValueFactory::Algorithm))
            .param(ParameterPattern::any())
            .param(ParameterPattern::detect(ValueFactory::SaltSize(SizeUnit::Byte)))
            .param(ParameterPattern::any())
            .build(),
    );
    rules.push(
        rule(PSS_SPEC_SALT_ONLY, pss, PSS_PARAMETER_SPEC)
            .method(MethodPattern::Constructor)
            .param(ParameterPattern::detect(ValueFactory::SaltSize(SizeUnit::Byte)))
            .build(),
    );
    rules
}

fn key_derivation_rules() -> Vec<DetectionRule> {
    let kdf = DetectionContext::KeyDerivation;
    let mut rules: Vec<DetectionRule> = get_instance(
        SECRET_KEY_FACTORY_GET_INSTANCE,
        SECRET_KEY_FACTORY,
        kdf,
        &[SECRET_KEY_FACTORY_GENERATE],
    )
    .into();
    rules.push(
        rule(SECRET_KEY_FACTORY_GENERATE, kdf, SECRET_KEY_FACTORY)
            .named("generateSecret")
            .param(ParameterPattern::any().depending_on(&[PBE_SPEC, PBE_SPEC_NO_LENGTH]))
            .produces(RawValue::Action(Action::Derive))
            .build(),
    );

    // PBEKeySpec(password, salt, iterationCount, keyLength)
    rules.push(
        rule(PBE_SPEC, kdf, PBE_KEY_SPEC)
            .method(MethodPattern::Constructor)
            .param(ParameterPattern::any())
            .param(ParameterPattern::any())
            .param(ParameterPattern::detect(ValueFactory::IterationCount))
            .param(ParameterPattern::detect(ValueFactory::KeySize(SizeUnit::Bit)))
            .build(),
    );
    rules.push(
        rule(PBE_SPEC_NO_LENGTH, kdf, PBE_KEY_SPEC)
            .method(MethodPattern::Constructor)
            .param(ParameterPattern::any())
            .param(ParameterPattern::any())
            .param(ParameterPattern::detect(ValueFactory::IterationCount))
            .build(),
    );

    rules.extend(get_instance(
        KEY_AGREEMENT_GET_INSTANCE,
        KEY_AGREEMENT,
        DetectionContext::KeyAgreement,
        &[KEY_AGREEMENT_GENERATE_SECRET],
    ));
    rules.push(action(
        KEY_AGREEMENT_GENERATE_SECRET,
        DetectionContext::KeyAgreement,
        KEY_AGREEMENT,
        "generateSecret",
        Action::Agree,
    ));
    rules
}

fn misc_rules() -> Vec<DetectionRule> {
    let mut rules: Vec<DetectionRule> = get_instance(
        SECURE_RANDOM_GET_INSTANCE,
        SECURE_RANDOM,
        DetectionContext::Prng,
        &[],
    )
    .into();

    rules.extend(get_instance(
        KEM_GET_INSTANCE,
        KEM,
        DetectionContext::Kem,
        &[KEM_NEW_ENCAPSULATOR, KEM_NEW_DECAPSULATOR],
    ));
    rules.push(action(
        KEM_NEW_ENCAPSULATOR,
        DetectionContext::Kem,
        KEM,
        "newEncapsulator",
        Action::Encapsulate,
    ));
    rules.push(action(
        KEM_NEW_DECAPSULATOR,
        DetectionContext::Kem,
        KEM,
        "newDecapsulator",
        Action::Decapsulate,
    ));
    rules
}

pub fn rules() -> Vec<DetectionRule> {
    let mut rules = cipher_rules();
    rules.extend(key_rules());
    rules.extend(digest_and_mac_rules());
    rules.extend(signature_rules());
    rules.extend(key_derivation_rules());
    rules.extend(misc_rules());
    rules
}
