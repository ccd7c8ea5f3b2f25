use rusqlite::{params, Connection};
use std::path::Path;

use crate::error::Result;
use crate::parser::{Record, ResultSet};

pub fn init_db<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let conn = Connection::open(path)?;
    create_schema(&conn)?;
    Ok(conn)
}

fn create_schema(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "encoding", "UTF-8")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS sections (
            id INTEGER PRIMARY KEY,
            source TEXT NOT NULL,
            position INTEGER NOT NULL,
            chapter TEXT NOT NULL,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            added_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_sections_source ON sections (source, position)",
        [],
    )?;

    Ok(())
}

/// 保存结果集
///
/// 在同一事务内先删除该来源的旧记录，再按顺序写入
///
/// # 参数
/// - `conn`: 数据库连接
/// - `source`: 来源标识（通常为文件路径）
/// - `result`: 结果集
///
/// # 返回
/// 写入的行数
pub fn save_result_set(conn: &mut Connection, source: &str, result: &ResultSet) -> Result<usize> {
    let tx = conn.transaction()?;

    tx.execute("DELETE FROM sections WHERE source = ?1", [source])?;

    {
        let mut stmt = tx.prepare(
            "INSERT INTO sections (source, position, chapter, title, content) VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        for (i, record) in result.iter().enumerate() {
            stmt.execute(params![source, i as i64, record.chapter, record.title, record.content])?;
        }
    }

    tx.commit()?;
    Ok(result.len())
}

/// 读取某个来源的结果集，按写入顺序返回
pub fn load_result_set(conn: &Connection, source: &str) -> Result<ResultSet> {
    let mut stmt = conn.prepare(
        "SELECT chapter, title, content FROM sections WHERE source = ?1 ORDER BY position",
    )?;

    let rows = stmt.query_map([source], |row| {
        Ok(Record {
            chapter: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
        })
    })?;

    let mut records = Vec::new();
    for record in rows {
        records.push(record?);
    }
    Ok(ResultSet::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn memory_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn test_save_and_load_preserves_order() {
        let mut conn = memory_db();
        let result = parse("乙\n二\n----\n甲\n一\n----\n乙\n三", "----").unwrap();

        let written = save_result_set(&mut conn, "book.txt", &result).unwrap();
        assert_eq!(written, 3);

        let loaded = load_result_set(&conn, "book.txt").unwrap();
        assert_eq!(loaded, result);
    }

    #[test]
    fn test_save_replaces_previous_rows() {
        let mut conn = memory_db();
        let first = parse("A\n1\n----\nB\n2", "----").unwrap();
        let second = parse("C\n3", "----").unwrap();

        save_result_set(&mut conn, "book.txt", &first).unwrap();
        save_result_set(&mut conn, "book.txt", &second).unwrap();

        let loaded = load_result_set(&conn, "book.txt").unwrap();
        assert_eq!(loaded, second);
    }

    #[test]
    fn test_sources_are_isolated() {
        let mut conn = memory_db();
        let a = parse("A", "----").unwrap();
        let b = parse("B\nbody", "----").unwrap();

        save_result_set(&mut conn, "a.txt", &a).unwrap();
        save_result_set(&mut conn, "b.txt", &b).unwrap();

        assert_eq!(load_result_set(&conn, "a.txt").unwrap(), a);
        assert_eq!(load_result_set(&conn, "b.txt").unwrap(), b);
        assert!(load_result_set(&conn, "c.txt").unwrap().is_empty());
    }

    #[test]
    fn test_init_db_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sections.db");

        let mut conn = init_db(&path).unwrap();
        save_result_set(&mut conn, "x.txt", &parse("X", "----").unwrap()).unwrap();
        drop(conn);

        let conn = init_db(&path).unwrap();
        assert_eq!(load_result_set(&conn, "x.txt").unwrap().len(), 1);
    }
}
