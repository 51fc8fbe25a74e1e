use super::*;
use std::fs;
use tempfile::TempDir;

fn schema_root() -> TempDir {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("mysql.sql"), "CREATE TABLE base (id INT);\n").unwrap();
    let dir = root.path().join("mysql-migrations");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("upgrade_1.sql"), "ALTER TABLE base ADD name TEXT;\n").unwrap();
    fs::write(dir.join("upgrade_2.sql"), "ALTER TABLE base ADD age INT;\n").unwrap();
    fs::write(dir.join("notes.txt"), "not a migration").unwrap();
    root
}

#[test]
fn test_list_returns_directory_entries() {
    let root = schema_root();
    let source = FsMigrationSource::new(root.path());

    let mut names = source.list_upgrade_scripts(Dialect::Mysql).unwrap();
    names.sort();
    assert_eq!(names, vec!["notes.txt", "upgrade_1.sql", "upgrade_2.sql"]);
}

#[test]
fn test_list_missing_directory_is_empty() {
    let root = schema_root();
    let source = FsMigrationSource::new(root.path());

    assert!(source.list_upgrade_scripts(Dialect::Pgsql).unwrap().is_empty());
}

#[test]
fn test_load_baseline_for_version_zero() {
    let root = schema_root();
    let source = FsMigrationSource::new(root.path());

    let sql = source.load_script(Dialect::Mysql, 0).unwrap();
    assert_eq!(sql, "CREATE TABLE base (id INT);\n");
}

#[test]
fn test_load_upgrade_script() {
    let root = schema_root();
    let source = FsMigrationSource::new(root.path());

    let sql = source.load_script(Dialect::Mysql, 2).unwrap();
    assert_eq!(sql, "ALTER TABLE base ADD age INT;\n");
}

#[test]
fn test_load_missing_script() {
    let root = schema_root();
    let source = FsMigrationSource::new(root.path());

    let err = source.load_script(Dialect::Mysql, 9).err().unwrap();
    match err {
        MigrateError::MissingMigrationFile { path } => {
            assert!(path.ends_with("upgrade_9.sql"));
        }
        other => panic!("expected MissingMigrationFile, got {other:?}"),
    }
}

#[test]
fn test_load_missing_baseline() {
    let root = schema_root();
    let source = FsMigrationSource::new(root.path());

    let err = source.load_script(Dialect::Pgsql, 0).err().unwrap();
    match err {
        MigrateError::MissingMigrationFile { path } => {
            assert!(path.ends_with("pgsql.sql"));
        }
        other => panic!("expected MissingMigrationFile, got {other:?}"),
    }
}

#[test]
fn test_dialect_layout() {
    let source = FsMigrationSource::new("/opt/schema");
    assert_eq!(
        source.migrations_dir(Dialect::Pgsql),
        Path::new("/opt/schema/pgsql-migrations")
    );
    assert_eq!(
        source.baseline_path(Dialect::Mysql),
        Path::new("/opt/schema/mysql.sql")
    );
}
