use super::*;

#[test]
fn test_tags() {
    assert_eq!(Dialect::Mysql.tag(), "mysql");
    assert_eq!(Dialect::Pgsql.tag(), "pgsql");
}

#[test]
fn test_from_driver_name_mysql_family() {
    assert_eq!(Dialect::from_driver_name("mysql"), Some(Dialect::Mysql));
    assert_eq!(Dialect::from_driver_name("mariadb"), Some(Dialect::Mysql));
    assert_eq!(Dialect::from_driver_name("MySQL"), Some(Dialect::Mysql));
}

#[test]
fn test_from_driver_name_pgsql_family() {
    assert_eq!(Dialect::from_driver_name("pgsql"), Some(Dialect::Pgsql));
    assert_eq!(Dialect::from_driver_name("postgres"), Some(Dialect::Pgsql));
    assert_eq!(Dialect::from_driver_name("postgresql"), Some(Dialect::Pgsql));
}

#[test]
fn test_from_driver_name_unknown() {
    assert_eq!(Dialect::from_driver_name("sqlite"), None);
    assert_eq!(Dialect::from_driver_name(""), None);
}

#[test]
fn test_table_listing_sql() {
    assert_eq!(Dialect::Mysql.table_listing_sql(), "SHOW TABLES");
    let pgsql = Dialect::Pgsql.table_listing_sql();
    assert!(pgsql.contains("information_schema.tables"));
    assert!(pgsql.contains("BASE TABLE"));
    assert!(pgsql.contains("table_schema = 'public'"));
}
