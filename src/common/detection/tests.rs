use super::names::*;
use super::*;
use crate::ole::MemoryContainer;
use proptest::prelude::*;

fn names(list: &[&str]) -> EntryNameSet {
    list.iter().collect()
}

fn kind_of(list: &[&str]) -> MediaKind {
    detect(&names(list), None)
}

/// Build an in-memory container whose root holds `list` as empty streams,
/// plus an optional CompObj payload.
fn container(list: &[&str], comp_obj: Option<&[u8]>) -> MemoryContainer {
    let mut root = MemoryContainer::new();
    for name in list {
        root.add_stream(&[*name], Vec::new());
    }
    if let Some(data) = comp_obj {
        root.add_stream(&[COMP_OBJ], data.to_vec());
    }
    root
}

fn kind_with_root(root: &mut MemoryContainer) -> MediaKind {
    detect_container(root, &DetectionOptions::default())
}

#[test]
fn test_office_documents() {
    assert_eq!(kind_of(&["Workbook"]), MediaKind::Spreadsheet);
    assert_eq!(kind_of(&["Book"]), MediaKind::Spreadsheet);
    assert_eq!(kind_of(&["WordDocument", "1Table"]), MediaKind::WordProcessor);
    assert_eq!(kind_of(&["PowerPoint Document", "Current User"]), MediaKind::Presentation);
    assert_eq!(kind_of(&["VisioDocument"]), MediaKind::Drawing);
    assert_eq!(kind_of(&["Quill", "Envelope"]), MediaKind::Publisher);
}

#[test]
fn test_works_spreadsheet_beats_workbook() {
    assert_eq!(kind_of(&["Workbook", "WksSSWorkBook"]), MediaKind::WorksSpreadsheet);
    assert_eq!(kind_of(&["WksSSWorkBook"]), MediaKind::WorksSpreadsheet);
}

#[test]
fn test_names_are_case_insensitive() {
    assert_eq!(kind_of(&["WORDDOCUMENT"]), MediaKind::WordProcessor);
    assert_eq!(kind_of(&["powerpoint document"]), MediaKind::Presentation);
}

#[test]
fn test_empty_and_unknown_are_generic() {
    assert_eq!(kind_of(&[]), MediaKind::GenericOle);
    assert_eq!(kind_of(&["Foo", "Bar"]), MediaKind::GenericOle);
}

#[test]
fn test_embeddings() {
    assert_eq!(kind_of(&["\u{1}Ole10Native"]), MediaKind::Ole10NativeEmbedding);
    assert_eq!(kind_of(&["CONTENTS", "\u{3}ObjInfo"]), MediaKind::GenericCompObjEmbedding);
    assert_eq!(kind_of(&["CONTENTS"]), MediaKind::GenericOle);
    assert_eq!(kind_of(&["Equation Native", "\u{1}CompObj"]), MediaKind::Equation);
    assert_eq!(kind_of(&["\u{3}OCXNAME", "CONTENTS"]), MediaKind::GenericOle);
}

#[test]
fn test_encryption_group() {
    assert_eq!(
        kind_of(&["EncryptedPackage", "EncryptionInfo", "\u{6}DataSpaces"]),
        MediaKind::ProtectedOoxml
    );
    assert_eq!(kind_of(&["EncryptedPackage", "EncryptionInfo"]), MediaKind::ProtectedOoxml);
    assert_eq!(kind_of(&["EncryptedPackage"]), MediaKind::GenericOle);
    // Without a root the DRM search cannot run and the next rule applies
    assert_eq!(kind_of(&["EncryptedPackage", "\u{6}DataSpaces"]), MediaKind::GenericOle);
}

#[test]
fn test_drm_data_space_found_recursively() {
    let mut root = container(&["EncryptedPackage"], None);
    root.add_stream(
        &["\u{6}DataSpaces", "DataSpaceInfo", "DRMEncryptedDataSpace"],
        vec![0; 8],
    );
    assert_eq!(kind_with_root(&mut root), MediaKind::DrmEncrypted);

    let mut root = container(&["WordDocument"], None);
    root.add_stream(&["\u{6}DataSpaces", "DataSpaceInfo", "\tDRMDataSpace"], vec![0; 8]);
    // The document stream is matched first
    assert_eq!(kind_with_root(&mut root), MediaKind::WordProcessor);

    let mut root = MemoryContainer::new();
    root.add_stream(&["\u{6}DataSpaces", "DataSpaceInfo", "\tDRMDataSpace"], vec![0; 8]);
    root.add_stream(&["\u{9}DRMContent"], vec![0; 8]);
    assert_eq!(kind_with_root(&mut root), MediaKind::DrmEncrypted);
}

#[test]
fn test_drm_search_depth_limit() {
    let mut root = container(&["EncryptedPackage"], None);
    root.add_stream(
        &["\u{6}DataSpaces", "DataSpaceInfo", "DRMEncryptedDataSpace"],
        vec![0; 8],
    );
    let options = DetectionOptions::new().with_max_search_depth(2);
    assert_eq!(detect_container(&mut root, &options), MediaKind::GenericOle);
}

#[test]
fn test_star_office() {
    assert_eq!(kind_of(&["StarCalcDocument"]), MediaKind::StarCalc);
    assert_eq!(kind_of(&["StarWriterDocument"]), MediaKind::StarWriter);
    assert_eq!(kind_of(&["StarDrawDocument3"]), MediaKind::GenericOle);

    let mut root = container(&["StarDrawDocument3"], Some(b"\x01\xfe\x00\x00StarDraw 5.0\x00"));
    assert_eq!(kind_with_root(&mut root), MediaKind::StarDraw);

    let mut root = container(&["StarDrawDocument3"], Some(b"StarImpress 5.0"));
    assert_eq!(kind_with_root(&mut root), MediaKind::StarImpress);

    let mut root = container(&["StarDrawDocument3"], Some(b"Quill96"));
    assert_eq!(kind_with_root(&mut root), MediaKind::GenericOle);
}

#[test]
fn test_works_word_processor() {
    assert_eq!(kind_of(&["MatOST"]), MediaKind::WorksWordProcessor);
    assert_eq!(kind_of(&["CONTENTS", "SPELLING"]), MediaKind::WorksWordProcessor);

    let mut root = container(&["CONTENTS"], Some(b"Microsoft Works\x00Quill96 Story Group Class"));
    assert_eq!(kind_with_root(&mut root), MediaKind::WorksWordProcessor);

    let mut root = container(&["CONTENTS"], Some(b"Paintbrush Picture"));
    assert_eq!(kind_with_root(&mut root), MediaKind::GenericCompObjEmbedding);

    // No root to read the CompObj stream from
    assert_eq!(kind_of(&["CONTENTS", "\u{1}CompObj"]), MediaKind::GenericCompObjEmbedding);
}

#[test]
fn test_graph_chart() {
    let mut root = container(&["Workbook"], Some(b"Microsoft Graph Chart\x00MSGraph.Chart.8\x00"));
    assert_eq!(kind_with_root(&mut root), MediaKind::GraphChart);

    // Another application name in CompObj does not change the kind
    let mut root = container(&["Workbook"], Some(b"StarDraw"));
    assert_eq!(kind_with_root(&mut root), MediaKind::Spreadsheet);
}

#[test]
fn test_project() {
    assert_eq!(kind_of(&["\u{1}CompObj", "Props", "   114"]), MediaKind::Project);
    assert_eq!(kind_of(&["\u{1}CompObj", "Props12", "   1"]), MediaKind::Project);
    // No data storage: later rules still apply
    assert_eq!(kind_of(&["\u{1}CompObj", "Props9"]), MediaKind::GenericOle);
    assert_eq!(
        kind_of(&["\u{1}CompObj", "Props", "__substg1.0_0037001F"]),
        MediaKind::MailMessage
    );
}

#[test]
fn test_misc_applications() {
    assert_eq!(
        kind_of(&["SwDocContentMgr", "SwDocMgrTempStorage"]),
        MediaKind::SolidWorks
    );
    assert_eq!(kind_of(&["SwDocContentMgr"]), MediaKind::GenericOle);
    assert_eq!(kind_of(&["Layer"]), MediaKind::EsriLayer);
    assert_eq!(kind_of(&["Dgn~Mf", "Dgn~S", "Dgn~H"]), MediaKind::Dgn8);
    assert_eq!(kind_of(&["Dgn~Mf", "Dgn~S"]), MediaKind::GenericOle);
}

#[test]
fn test_mail_message() {
    assert_eq!(
        kind_of(&["__substg1.0_0037001F", "__properties_version1.0"]),
        MediaKind::MailMessage
    );
    assert_eq!(kind_of(&["__nameid_version1.0"]), MediaKind::GenericOle);
}

#[test]
fn test_rule_names_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for rule in RULES {
        assert!(seen.insert(rule.name), "duplicate rule {}", rule.name);
    }
}

#[cfg(feature = "ole")]
#[test]
fn test_detect_file_on_disk() {
    use std::io::Write;

    let file = tempfile::NamedTempFile::new().unwrap();
    {
        let mut comp = cfb::create(file.path()).unwrap();
        comp.create_stream("/StarDrawDocument3").unwrap();
        let mut stream = comp.create_stream("/\u{1}CompObj").unwrap();
        stream.write_all(b"\x01\x00\xfe\xff\x03\x0a\x00\x00StarDraw 5.0\x00").unwrap();
        drop(stream);
        comp.flush().unwrap();
    }

    assert_eq!(detect_file_format(file.path()), Some(MediaKind::StarDraw));
}

#[cfg(feature = "ole")]
#[test]
fn test_detect_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(detect_file_format(dir.path().join("missing.doc")), None);
}

const KNOWN_NAMES: &[&str] = &[
    WORKBOOK,
    BOOK,
    WORD_DOCUMENT,
    POWERPOINT_DOCUMENT,
    VISIO_DOCUMENT,
    QUILL,
    OLE10_NATIVE,
    ENCRYPTED_PACKAGE,
    ENCRYPTION_INFO,
    DATA_SPACES,
    STAR_CALC_DOCUMENT,
    STAR_DRAW_DOCUMENT_3,
    MAT_OST,
    CONTENTS,
    SPELLING,
    OBJ_INFO,
    COMP_OBJ,
    PROPS,
    "   42",
    LAYER,
    "__substg1.0_1000001F",
];

fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(KNOWN_NAMES).prop_map(str::to_string),
        "[ -~]{0,31}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_detection_is_total(list in prop::collection::vec(name_strategy(), 0..12)) {
        let set: EntryNameSet = list.iter().collect();
        let kind = detect(&set, None);
        prop_assert!(MediaKind::ALL.contains(&kind));

        let mut root = MemoryContainer::new();
        for name in list.iter().filter(|name| !name.is_empty()) {
            root.add_stream(&[name.as_str()], b"StarImpress".to_vec());
        }
        let kind = detect_container(&mut root, &DetectionOptions::default());
        prop_assert!(MediaKind::ALL.contains(&kind));
    }

    #[test]
    fn prop_works_spreadsheet_has_precedence(list in prop::collection::vec(name_strategy(), 0..12)) {
        let mut set: EntryNameSet = list.iter().collect();
        set.insert(WKS_SS_WORKBOOK);
        prop_assert_eq!(detect(&set, None), MediaKind::WorksSpreadsheet);
    }
}
