mod fixtures;

use crypto_inventory_core::config::PipelineConfig;
use crypto_inventory_core::engine::{CallSite, CallSiteFile, DetectionEngine, Expression};
use crypto_inventory_core::model::{Convention, Kind};
use crypto_inventory_core::{Enricher, Pipeline, Reorganizer, RuleSet, Translator};
use fixtures::*;
use pretty_assertions::assert_eq;

// =============================================================================
// Cipher transformations
// =============================================================================

#[test]
fn test_transformation_with_mode_block_size() {
    let assets = analyze(&[cipher_get_instance("AES/CFB8/NoPadding", 10)]);
    assert_eq!(assets.len(), 1);

    let aes = &assets[0];
    assert_eq!(aes.kind, Kind::BlockCipher);
    assert_eq!(aes.name, "AES128");
    assert_eq!(aes.child_name(Kind::KeyLength), Some("128"));
    let mode = aes.child(Kind::Mode).unwrap();
    assert_eq!(mode.name, "CFB");
    assert_eq!(mode.child_name(Kind::BlockSize), Some("8"));
    assert!(!aes.has_child(Kind::BlockSize));
    assert!(aes.find_all(Kind::Padding).is_empty());
}

#[test]
fn test_cipher_default_key_length_stays_in_its_convention() {
    let rules = RuleSet::standard().unwrap();
    let mut store = DetectionEngine::new(&rules)
        .detect(&cipher_get_instance("AES/CBC/PKCS5Padding", 12))
        .unwrap();
    retag(&mut store, Convention::BouncyCastle);

    let mut forest = Translator::new().translate(&store);
    Reorganizer::new().reorganize(&mut forest);
    Enricher::new().enrich(&mut forest);
    let aes = &forest.snapshot()[0];
    assert_eq!(aes.name, "AES");
    assert!(!aes.has_child(Kind::KeyLength));
}

#[test]
fn test_aes_identifier_with_key_size_and_mode() {
    let assets = analyze(&[cipher_get_instance("AES_256/GCM/NoPadding", 11)]);
    let aes = &assets[0];
    assert_eq!(aes.name, "AES256");
    assert_eq!(aes.child_name(Kind::KeyLength), Some("256"));
    assert_eq!(aes.child_name(Kind::Mode), Some("GCM"));
    assert_eq!(aes.child_name(Kind::Oid), Some("2.16.840.1.101.3.4.1.4.6"));
}

#[test]
fn test_aes_key_gets_base_identifier() {
    let assets = analyze(&[secret_key_spec("AES", 14)]);
    assert_eq!(assets.len(), 1);

    let key = &assets[0];
    assert_eq!(key.kind, Kind::SecretKey);
    let aes = key.child(Kind::BlockCipher).unwrap();
    assert_eq!(aes.child_name(Kind::Oid), Some("2.16.840.1.101.3.4.1"));
}

// =============================================================================
// Convention defaults
// =============================================================================

#[test]
fn test_des_key_length_default_only_for_its_convention() {
    let rules = RuleSet::standard().unwrap();
    let store = DetectionEngine::new(&rules)
        .detect(&secret_key_spec("DES", 3))
        .unwrap();
    assert_eq!(store.convention, Convention::Jca);

    let inventory = |store| {
        let mut forest = Translator::new().translate(store);
        Reorganizer::new().reorganize(&mut forest);
        Enricher::new().enrich(&mut forest);
        forest.snapshot()
    };

    let jca = inventory(&store);
    assert_eq!(jca[0].kind, Kind::SecretKey);
    assert_eq!(jca[0].child_name(Kind::KeyLength), Some("56"));

    let mut retagged = store.clone();
    retag(&mut retagged, Convention::BouncyCastle);
    let other = inventory(&retagged);
    assert_eq!(other[0].origin, Some(Convention::BouncyCastle));
    assert!(other[0].find_all(Kind::KeyLength).is_empty());
}

#[test]
fn test_explicit_key_size_is_not_overridden() {
    let call = CallSite::new("javax.crypto.KeyGenerator", "getInstance", loc(5))
        .with_argument(Expression::string("AES"))
        .with_follow_up(
            CallSite::new("javax.crypto.KeyGenerator", "init", loc(6))
                .with_argument(Expression::symbol("KEY_BITS", Expression::int(192))),
        );
    let assets = analyze(&[call]);
    let key = &assets[0];
    assert_eq!(key.kind, Kind::SecretKey);
    assert_eq!(key.child_name(Kind::KeyLength), Some("192"));
}

// =============================================================================
// Signatures
// =============================================================================

#[test]
fn test_pss_scheme_gets_default_parameters() {
    let assets = analyze(&[signature_get_instance("RSASSA-PSS", 30)]);
    assert_eq!(assets.len(), 1);

    let pss = &assets[0];
    assert_eq!(pss.kind, Kind::ProbabilisticSignatureScheme);
    assert_eq!(pss.child_name(Kind::MessageDigest), Some("SHA-1"));
    let mgf = pss.child(Kind::MaskGenerationFunction).unwrap();
    assert_eq!(mgf.name, "MGF1");
    assert_eq!(mgf.child_name(Kind::MessageDigest), Some("SHA-1"));
    assert_eq!(pss.child_name(Kind::SaltLength), Some("160"));
}

#[test]
fn test_signature_actions_are_flattened() {
    let call = signature_get_instance("SHA256withECDSA", 40)
        .with_follow_up(
            CallSite::new("java.security.Signature", "initSign", loc(41))
                .with_argument(Expression::unknown_symbol("privateKey")),
        );
    let assets = analyze(&[call]);
    let signature = &assets[0];
    assert_eq!(signature.name, "SHA256withECDSA");
    assert!(signature.has_child(Kind::Sign));
    assert_eq!(signature.child_name(Kind::Oid), Some("1.2.840.10045.4.3.2"));
}

// =============================================================================
// Whole-file behaviour
// =============================================================================

#[test]
fn test_no_duplicate_child_kinds_across_catalog() {
    let calls = vec![
        cipher_get_instance("AES/CBC/PKCS5Padding", 1),
        cipher_get_instance("RSA/ECB/OAEPWithSHA-256AndMGF1Padding", 2),
        secret_key_spec("HmacSHA256", 3),
        signature_get_instance("SHA384withRSA/PSS", 4),
        CallSite::new("java.security.MessageDigest", "getInstance", loc(5))
            .with_argument(Expression::string("SHA-512/256")),
        CallSite::new("crypto/sha256", "New", loc(6)),
    ];
    let assets = analyze(&calls);
    assert_eq!(assets.len(), calls.len());
    assert!(all_unique(&assets));
}

#[test]
fn test_unmatched_file_is_empty() {
    let calls = vec![
        CallSite::new("java.lang.StringBuilder", "append", loc(1))
            .with_argument(Expression::string("AES")),
        // required algorithm argument that cannot be traced
        CallSite::new("javax.crypto.Cipher", "getInstance", loc(2))
            .with_argument(Expression::unknown_symbol("transformation")),
    ];
    let analysis = Pipeline::standard().unwrap().analyze(&calls);
    assert!(analysis.is_empty());
    assert!(analysis.assets().is_empty());
}

#[test]
fn test_findings_carry_locations() {
    let analysis = Pipeline::standard()
        .unwrap()
        .analyze(&[cipher_get_instance("AES/GCM/NoPadding", 12)]);
    let findings = analysis.findings();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].file, FILE);
    assert_eq!(findings[0].line, 12);
    assert_eq!(findings[0].rule, "jca.cipher.get_instance");
    assert_eq!(findings[0].value_type, "algorithm");
}

#[test]
fn test_loaded_dump_runs_through_pipeline() {
    let dump = CallSiteFile::load(get_fixture_path("dumps/Crypto.json")).unwrap();
    assert_eq!(dump.calls.len(), 3);

    let analysis = Pipeline::standard().unwrap().analyze(&dump.calls);
    assert_eq!(analysis.stores.len(), 2);
    let assets = analysis.assets();
    assert_eq!(assets[0].name, "AES128");
    assert_eq!(assets[1].kind, Kind::MessageDigest);
    assert_eq!(assets[1].name, "SHA-256");
    assert!(assets[1].has_child(Kind::Digest));
}

#[test]
fn test_stages_can_be_disabled() {
    let config = PipelineConfig {
        reorganize: false,
        enrich: false,
        ..PipelineConfig::default()
    };
    let pipeline = Pipeline::new(config).unwrap();
    let assets = pipeline.analyze(&[signature_get_instance("RSASSA-PSS", 1)]).assets();
    assert!(!assets[0].has_child(Kind::MessageDigest));
    assert!(!assets[0].has_child(Kind::SaltLength));
}

#[test]
fn test_analysis_is_repeatable() {
    let pipeline = Pipeline::standard().unwrap();
    let calls = vec![
        cipher_get_instance("DESede/CBC/PKCS5Padding", 1),
        secret_key_spec("DESede", 2),
    ];
    assert_eq!(
        pipeline.analyze(&calls).assets(),
        pipeline.analyze(&calls).assets()
    );
}
