//! End-to-end runs of the assembler against a bucket laid out on local disk.

use postsector::io::join;
use postsector::lookup::*;
use postsector::*;
use std::path::Path;

const EXTRACT: &str = "\
pcd,pcds,doterm,rgn,ru11ind
SW1A2AA,SW1A2AA,,E,1
SW1A2AB,SW1A2AB,2020-01-01,E,1
";
const REGIONS: &str = "\
GOR10CD,GOR10NM
E,(pseudo) England
";
const RURAL_URBAN: &str = "\
RU11IND,RU11NM
1,Urban (E)
";

fn bucket(dir: &Path, extract: &str, regions: &str, rural_urban: &str) -> Config {
    let root = dir.to_string_lossy().into_owned();
    for (relative, body) in [
        (NSPL_EXTRACT, extract),
        (REGION_NAMES, regions),
        (RURAL_URBAN_NAMES, rural_urban),
    ] {
        let path = join(&root, relative);
        std::fs::create_dir_all(Path::new(&path).parent().unwrap()).unwrap();
        std::fs::write(path, body).unwrap();
    }
    Config::default().with_bucket(Some(root))
}

#[test]
fn builds_one_row_per_active_sector() {
    let dir = tempfile::tempdir().unwrap();
    let config = bucket(dir.path(), EXTRACT, REGIONS, RURAL_URBAN);
    let table = Assembler::standard(config.clone())
        .run(&Run::default())
        .unwrap();
    assert_eq!(table.shape(), (1, 6));
    let written = std::fs::read_to_string(config.path(LOOKUP)).unwrap();
    assert_eq!(
        written,
        "is_urban,region_code,region_name,rural_urban_code,rural_urban_name,sector_key\n\
         1,e,england,1,urban,sw1a2\n"
    );
}

#[test]
fn unmatched_codes_leave_attributes_null() {
    let dir = tempfile::tempdir().unwrap();
    let extract = "\
pcds,doterm,rgn,ru11ind
N1 9GU,,E12000007,A1
LL57 4AA,,W99999999,E2
LL57 4AB,,W99999999,D1
";
    let config = bucket(dir.path(), extract, REGIONS, RURAL_URBAN);
    let table = Assembler::standard(config).run(&Run::default()).unwrap();
    assert_eq!(table.rows(), 2);
    assert!(table.text(REGION_NAME).unwrap().iter().all(Option::is_none));
    assert_eq!(table.integer(IS_URBAN).unwrap(), &[None, None]);
    assert_eq!(
        table.text(RURAL_URBAN_CODE).unwrap(),
        &[Some("a1".to_string()), Some("e2".to_string())]
    );
}

#[test]
fn reruns_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let config = bucket(dir.path(), EXTRACT, REGIONS, RURAL_URBAN);
    let assembler = Assembler::standard(config.clone());
    assembler.run(&Run::default()).unwrap();
    let first = std::fs::read(config.path(LOOKUP)).unwrap();
    assembler.run(&Run::default()).unwrap();
    let second = std::fs::read(config.path(LOOKUP)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn duplicate_region_code_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let regions = "\
GOR10CD,GOR10NM
E,England
E,(pseudo) England
";
    let config = bucket(dir.path(), EXTRACT, regions, RURAL_URBAN);
    let err = Assembler::standard(config.clone())
        .run(&Run::default())
        .unwrap_err();
    assert!(matches!(err, Error::Cardinality { .. }));
    assert!(!Path::new(&config.path(LOOKUP)).exists());
}

#[test]
fn missing_extract_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default().with_bucket(Some(dir.path().to_string_lossy().into_owned()));
    let err = Assembler::standard(config).run(&Run::default()).unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn limit_and_parquet_output() {
    let dir = tempfile::tempdir().unwrap();
    let extract = "\
pcds,doterm,rgn,ru11ind
SW1A 2AA,,E,1
M1 1AE,,E,1
";
    let config = bucket(dir.path(), extract, REGIONS, RURAL_URBAN);
    let ref output = config.path("clean/lookup.parquet");
    let run = Run {
        limit: Some(1),
        output: Some(output.clone()),
    };
    let table = Assembler::standard(config.clone()).run(&run).unwrap();
    assert_eq!(table.text(SECTOR_KEY).unwrap(), &[Some("sw1a 2".to_string())]);
    let back = io::Adapter::from(&config)
        .read_parquet(output, &io::ReadOptions::default())
        .unwrap();
    assert_eq!(back, table);
}
