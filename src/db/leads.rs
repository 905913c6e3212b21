// src/db/leads.rs
use rusqlite::{params, Connection};

use crate::domain::leads::Lead;
use crate::errors::ServerError;

/// A stored lead, joined with the car it was submitted for.
#[derive(Debug, Clone)]
pub struct LeadRow {
    pub id: i64,
    pub kind: String,
    pub name: String,
    pub phone: String,
    pub comment: Option<String>,
    pub trade_in_car: Option<String>,
    pub created_at: i64,
    /// "BMW X5", or None if the car has since been deleted.
    pub car_name: Option<String>,
}

pub fn insert_lead(
    conn: &Connection,
    car_id: i64,
    user_id: Option<i64>,
    lead: &Lead,
    now: i64,
) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        insert into leads (car_id, user_id, kind, name, phone, comment, trade_in_car, created_at)
        values (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
        params![
            car_id,
            user_id,
            lead.kind.as_str(),
            lead.name,
            lead.phone,
            lead.comment,
            lead.trade_in_car,
            now
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert lead failed: {e}")))?;
    Ok(conn.last_insert_rowid())
}

/// Newest first. `limit` of None returns everything.
pub fn list_leads(conn: &Connection, limit: Option<i64>) -> Result<Vec<LeadRow>, ServerError> {
    let mut stmt = conn
        .prepare(
            r#"
            select l.id, l.kind, l.name, l.phone, l.comment, l.trade_in_car, l.created_at,
                   c.brand || ' ' || c.model
            from leads l
            left join cars c on c.id = l.car_id
            order by l.created_at desc, l.id desc
            limit ?
            "#,
        )
        .map_err(|e| ServerError::DbError(format!("prepare list leads failed: {e}")))?;

    let rows = stmt
        .query_map(params![limit.unwrap_or(-1)], |r| {
            Ok(LeadRow {
                id: r.get(0)?,
                kind: r.get(1)?,
                name: r.get(2)?,
                phone: r.get(3)?,
                comment: r.get(4)?,
                trade_in_car: r.get(5)?,
                created_at: r.get(6)?,
                car_name: r.get(7)?,
            })
        })
        .map_err(|e| ServerError::DbError(format!("list leads failed: {e}")))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(format!("read lead row failed: {e}")))?);
    }
    Ok(out)
}

pub fn count_leads(conn: &Connection) -> Result<i64, ServerError> {
    conn.query_row("select count(*) from leads", [], |r| r.get(0))
        .map_err(|e| ServerError::DbError(format!("count leads failed: {e}")))
}
