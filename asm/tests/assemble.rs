use arch::{optab::OpTable, record::Record};
use sicasm::{assemble, Assembled, Error};

const COPY: &str = "\
COPY    START   1000
. load, add and store
FIRST   LDA     ALPHA
~       ADD     INCR
~       STA     BETA
~       J       LATER
ALPHA   WORD    5
INCR    WORD    1
BETA    RESW    1
LATER   RSUB    -
EOF     BYTE    C'EOF'
INPUT   BYTE    X'F1'
~       END     FIRST
";

fn run(source: &str) -> Assembled {
    let out = assemble(source, OpTable::sic()).expect("Assembly failed");
    for diag in &out.errors {
        println!("{:>3}: {}", diag.row + 1, diag.error);
    }
    println!("{}", out.object);
    out
}

fn text_payloads(records: &[Record]) -> Vec<&str> {
    records
        .iter()
        .filter_map(|record| match record {
            Record::Text { payload, .. } => Some(payload.as_str()),
            _ => None,
        })
        .collect()
}

macro_rules! case {
    ($name:ident, $source:expr, $expect:expr) => {
        #[test]
        fn $name() {
            let out = run($source);
            assert!(out.errors.is_empty());
            assert_eq!(out.object, $expect);
        }
    };
}

case!(
    single_word,
    "~ START 1000\nFIRST WORD 5\n~ END FIRST\n",
    "H^      ^001000^000003\nT^001000^03000005\nE^001000\n"
);

case!(
    copy_program,
    COPY,
    "H^COPY  ^001000^00001C\n\
     T^001000^1200100C18100F0C10123C1015000005000001\n\
     T^001015^074C0000454F46F1\n\
     E^001000\n"
);

case!(
    reservation_only,
    "BUF START 0\nA RESB 4096\nB RESW 2\n~ END A\n",
    "H^BUF   ^000000^001006\nE^000000\n"
);

#[test]
fn copy_listing() {
    let out = run(COPY);
    let listing: Vec<&str> = out.listing.lines().collect();
    assert_eq!(listing.len(), 12);
    assert_eq!(listing[0], "1000\tCOPY\tSTART\t1000\t-");
    assert_eq!(listing[3], "1006\t~\tSTA\tBETA\t0C1012");
    assert_eq!(listing[7], "1012\tBETA\tRESW\t1\t-");
    assert_eq!(listing[8], "1015\tLATER\tRSUB\t-\t4C0000");
    assert_eq!(listing[11], "101C\t~\tEND\tFIRST\t-");
}

#[test]
fn copy_intermediate_and_symtab() {
    let out = run(COPY);
    let inter: Vec<&str> = out.intermediate.lines().collect();
    assert_eq!(inter[0], "1000    COPY    START   1000");
    assert_eq!(inter[1], "1000    FIRST   LDA     ALPHA");
    assert_eq!(inter[8], "1015    LATER   RSUB    -");
    assert_eq!(
        out.symtab,
        "FIRST   1000\nALPHA   100C\nINCR    100F\nBETA    1012\n\
         LATER   1015\nEOF     1018\nINPUT   101B\n"
    );
}

#[test]
fn undefined_symbol() {
    let out = run("P START 0\n~ LDA NOWHERE\nX WORD 7\n~ END P\n");
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].row, 1);
    assert!(matches!(
        &out.errors[0].error,
        Error::UndefinedSymbol(label, 0) if label == "NOWHERE"
    ));
    assert_eq!(text_payloads(&out.records), vec!["000000000007"]);
}

#[test]
fn duplicate_symbol() {
    let out = run("P START 100\nX WORD 1\nY WORD 2\nX WORD 3\n~ LDA X\n~ END P\n");
    assert_eq!(out.errors.len(), 1);
    assert!(matches!(
        &out.errors[0].error,
        Error::DuplicateSymbol(label, 0x106, 1) if label == "X"
    ));
    // the first definition wins
    assert!(out.symtab.starts_with("X       0100\n"));
    assert_eq!(
        text_payloads(&out.records),
        vec!["000001000002000003000100"]
    );
}

#[test]
fn addresses_fit_record_fields() {
    let out = run("P START 1000000\n~ WORD 1\n~ END P\n");
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].row, 0);
    assert!(matches!(out.errors[0].error, Error::InvalidOperand(..)));
    assert_eq!(
        out.object,
        "H^P     ^000000^000003\nT^000000^03000001\nE^000000\n"
    );

    let out = run("P START FFFFF0\nX RESB 100\n~ WORD 1\n~ END P\n");
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].row, 1);
    assert!(matches!(out.errors[0].error, Error::InvalidOperand(..)));
    assert_eq!(
        out.object,
        "H^P     ^FFFFF0^000003\nT^FFFFF0^03000001\nE^FFFFF0\n"
    );
}

#[test]
fn signed_start_is_rejected() {
    let out = run("P START +1000\n~ END P\n");
    assert_eq!(out.start, 0);
    assert!(matches!(out.errors[0].error, Error::InvalidOperand(..)));
}

#[test]
fn syntax_error_is_reported() {
    let out = run("P START 0\n~ LDA\nX WORD 1\n~ END P\n");
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].row, 1);
    assert!(matches!(out.errors[0].error, Error::SyntaxError(_)));
    assert_eq!(out.length, 3);
}

#[test]
fn missing_start_and_end() {
    assert!(matches!(
        assemble("~ LDA X\n~ END -\n", OpTable::sic()),
        Err(Error::MissingStart)
    ));
    assert!(matches!(
        assemble("P START 0\n~ LDA X\n", OpTable::sic()),
        Err(Error::MissingEnd)
    ));
}

#[test]
fn long_run_splits_records() {
    let mut source = String::from("P START 2000\n");
    for i in 0..15 {
        source.push_str(&format!("W{} WORD {}\n", i, i));
    }
    source.push_str("~ END W0\n");
    let out = run(&source);
    assert_eq!(out.length, 45);

    let texts: Vec<String> = out
        .records
        .iter()
        .filter(|r| matches!(r, Record::Text { .. }))
        .map(|r| r.to_string())
        .collect();
    assert_eq!(texts.len(), 2);
    assert!(texts[0].starts_with("T^002000^1E"));
    assert!(texts[1].starts_with("T^00201E^0F"));
}

#[test]
fn payloads_reproduce_code_stream() {
    let mut source = String::from("P START 0\n");
    for i in 0..12 {
        source.push_str(&format!("~ BYTE C'ABCDEFG{}'\n", i % 10));
    }
    source.push_str("~ END P\n");
    let out = run(&source);

    let payloads = text_payloads(&out.records);
    assert!(payloads.iter().all(|p| p.len() <= 60));
    let stream: String = out
        .listing
        .lines()
        .filter_map(|l| l.rsplit('\t').next())
        .filter(|code| *code != "-")
        .collect();
    assert_eq!(payloads.concat(), stream);
}

#[test]
fn forward_reference_resolves() {
    let out = run("P START 1000\n~ J END1\n~ RESB 16\nEND1 RSUB -\n~ END P\n");
    assert!(out.errors.is_empty());
    assert_eq!(text_payloads(&out.records), vec!["3C1013", "4C0000"]);
}

#[test]
fn custom_optab() {
    let optab = OpTable::parse_text("LDA 00\nLDB 68\n").unwrap();
    let out = assemble("P START 0\nA LDB A\n~ LDA B\nB WORD 2\n~ END P\n", &optab).unwrap();
    assert!(out.errors.is_empty());
    assert_eq!(text_payloads(&out.records), vec!["680000000006000002"]);
    assert!(matches!(
        assemble("P START 0\n~ STA A\n~ END P\n", &optab).unwrap().errors[0].error,
        Error::InvalidOpcode(..)
    ));
}

#[test]
fn idempotent() {
    let a = run(COPY);
    let b = run(COPY);
    assert_eq!(a.object, b.object);
    assert_eq!(a.listing, b.listing);
    assert_eq!(a.records, b.records);
}

#[test]
fn demo_tables_agree() {
    let source = include_str!("../../demos/input.txt");
    let text = OpTable::parse_text(include_str!("../../demos/optab.txt")).unwrap();
    let yaml = sicasm::loader::parse_optab_yaml(include_str!("../../demos/optab.yaml")).unwrap();

    let builtin = run(source);
    assert!(builtin.errors.is_empty());
    assert_eq!(builtin.name, "COPY");
    assert_eq!(builtin.length, 0x34);
    for optab in [&text, &yaml] {
        let out = assemble(source, optab).unwrap();
        assert!(out.errors.is_empty());
        assert_eq!(out.object, builtin.object);
    }
}
