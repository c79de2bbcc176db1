// French conversion tests against the default (merged) lexicon.

use numwords::{ConvertOptions, Conversion, convert};

fn exact(text: &str) -> Conversion {
    convert(text, &ConvertOptions::default())
}

fn fuzzy(text: &str) -> Conversion {
    convert(text, &ConvertOptions::fuzzy())
}

fn number(text: &str) -> Option<u64> {
    exact(text).as_u64()
}

// ---------------------------------------------------------------------------
// Cardinals
// ---------------------------------------------------------------------------

#[test]
fn hundreds() {
    assert_eq!(number("cent"), Some(100));
    assert_eq!(number("cent cinq"), Some(105));
    assert_eq!(number("cent vingt cinq"), Some(125));
}

#[test]
fn thousands() {
    assert_eq!(number("quatre mille trente"), Some(4030));
    assert_eq!(number("mille cent onze"), Some(1111));
    assert_eq!(number("vingt mille cinq cent soixante neuf"), Some(20_569));
}

#[test]
fn millions() {
    assert_eq!(number("six million cinq mille deux"), Some(6_005_002));
}

#[test]
fn bare_magnitudes() {
    assert_eq!(number("mille"), Some(1_000));
    assert_eq!(number("million"), Some(1_000_000));
    assert_eq!(number("milliard"), Some(1_000_000_000));
}

#[test]
fn long_scale_trillion() {
    assert_eq!(number("cinq trillion"), Some(5_000_000_000_000_000_000));
}

#[test]
fn vigesimal_tens() {
    assert_eq!(number("soixante-dix-sept"), Some(77));
    assert_eq!(number("quatre-vingts"), Some(80));
    assert_eq!(number("quatre-vingt-dix-neuf"), Some(99));
    assert_eq!(number("cent et quatre vingt dix neuf"), Some(199));
}

// ---------------------------------------------------------------------------
// Hyphens and punctuation
// ---------------------------------------------------------------------------

#[test]
fn hyphenated_forms() {
    assert_eq!(number("soixante-neuf"), Some(69));
    assert_eq!(number("cent-cinq"), Some(105));
    assert_eq!(number("cent vingt-cinq"), Some(125));
    assert_eq!(number("quatre-mille trente"), Some(4030));
    assert_eq!(number("six-million cinq-mille deux"), Some(6_005_002));
}

#[test]
fn punctuation_inside_region() {
    assert_eq!(number("mille, cent-onze"), Some(1111));
}

#[test]
fn embedded_in_sentence() {
    assert_eq!(
        exact("il y avait vingt-mille, cinq-cent soixante-neuf X dans les cinq trillion Y"),
        Conversion::from("il y avait 20569 X dans les 5000000000000000000 Y")
    );
}

#[test]
fn punctuation_after_region_is_kept() {
    assert_eq!(exact("J'ai trente-deux ans."), Conversion::from("J'ai 32 ans."));
    assert_eq!(exact("«cent» ans"), Conversion::from("«100» ans"));
}

#[test]
fn punctuation_around_whole_number() {
    assert_eq!(number("cent."), Some(100));
    assert_eq!(number("(cent)"), Some(100));
    assert_eq!(exact("un."), Conversion::from("un."));
}

// ---------------------------------------------------------------------------
// Separate numbers
// ---------------------------------------------------------------------------

#[test]
fn adjacent_units_stay_separate() {
    assert_eq!(exact("un deux trois"), Conversion::from("1 2 3"));
    assert_eq!(exact("test un deux trois test"), Conversion::from("test 1 2 3 test"));
    assert_eq!(exact("un trente"), Conversion::from("1 30"));
}

#[test]
fn text_around_numbers() {
    assert_eq!(exact("xxxxxxx cent"), Conversion::from("xxxxxxx 100"));
    assert_eq!(exact("digit un "), Conversion::from("digit 1 "));
}

#[test]
fn helpers_and_junk_pass_through() {
    assert_eq!(exact("et"), Conversion::from("et"));
    assert_eq!(exact("un"), Conversion::from("un"));
    assert_eq!(exact("junkvalue"), Conversion::from("junkvalue"));
    assert_eq!(exact(""), Conversion::from(""));
}

// ---------------------------------------------------------------------------
// Decimals
// ---------------------------------------------------------------------------

#[test]
fn decimals() {
    assert_eq!(exact("quarante deux point cinq").as_f64(), Some(42.5));
    assert_eq!(exact("dix point cinq").as_f64(), Some(10.5));
    assert_eq!(exact("onze point un").as_f64(), Some(11.1));
    assert_eq!(exact("deux virgule cinq").as_f64(), Some(2.5));
    assert_eq!(exact("cinq  point deux").as_f64(), Some(5.2));
}

#[test]
fn decimal_digits_concatenate() {
    let pi = exact("trois point un quatre un cinq neuf deux six");
    assert_eq!(pi.to_string(), "3.1415926");
    assert_eq!(pi.as_f64(), Some(3.1415926));
}

#[test]
fn decimal_leading_zero() {
    assert_eq!(exact("un virgule zéro cinq").to_string(), "1.05");
}

// ---------------------------------------------------------------------------
// Ordinals
// ---------------------------------------------------------------------------

#[test]
fn ordinals() {
    let cases = [
        ("premier", 1),
        ("second", 2),
        ("troisième", 3),
        ("quatorzième", 14),
        ("vingt-cinquième", 25),
        ("trente quatrième", 34),
        ("quarante septième", 47),
        ("cinquante troisième", 53),
        ("soixantième", 60),
        ("soixante-douzième", 72),
        ("quatre-vingt-neuvième", 89),
        ("quatre-vingt-seizième", 96),
        ("cent huitième", 108),
        ("cent dixième", 110),
    ];
    for (text, expected) in cases {
        assert_eq!(number(text), Some(expected), "{text}");
    }
}

// ---------------------------------------------------------------------------
// Fuzzy mode
// ---------------------------------------------------------------------------

#[test]
fn fuzzy_single_word() {
    assert_eq!(fuzzy("cant"), Conversion::from(100));
}

#[test]
fn fuzzy_phrases() {
    assert_eq!(fuzzy("deu malle conq"), Conversion::from(2005));
    assert_eq!(fuzzy("trois millyon seft cant vingt sex"), Conversion::from(3_000_726));
}

#[test]
fn fuzzy_off_leaves_misspellings() {
    assert_eq!(exact("cant"), Conversion::from("cant"));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn conversion_is_idempotent() {
    let inputs = [
        "il y avait vingt-mille, cinq-cent soixante-neuf X dans les cinq trillion Y",
        "test un deux trois test",
        "digit un ",
        "mille, cent-onze",
        "junkvalue",
        "un",
        "trois point un quatre",
    ];
    for input in inputs {
        let once = exact(input).to_string();
        let twice = exact(&once).to_string();
        assert_eq!(once, twice, "{input}");
    }
}
