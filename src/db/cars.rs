// src/db/cars.rs
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::domain::vehicle::{Vehicle, VehicleDraft};
use crate::errors::ServerError;

const CAR_COLUMNS: &str = "id, brand, model, year, price, mileage, body_type, status, \
     color, engine, transmission, description, image_url, created_at";

fn row_to_vehicle(r: &Row<'_>) -> rusqlite::Result<Vehicle> {
    Ok(Vehicle {
        id: r.get(0)?,
        brand: r.get(1)?,
        model: r.get(2)?,
        year: r.get(3)?,
        price: r.get(4)?,
        mileage: r.get(5)?,
        body_type: r.get(6)?,
        status: r.get(7)?,
        color: r.get(8)?,
        engine: r.get(9)?,
        transmission: r.get(10)?,
        description: r.get(11)?,
        image_url: r.get(12)?,
        created_at: r.get(13)?,
    })
}

/// Whole catalog, most recently added first.
pub fn list_cars(conn: &Connection) -> Result<Vec<Vehicle>, ServerError> {
    let mut stmt = conn
        .prepare(&format!(
            "select {CAR_COLUMNS} from cars order by created_at desc, id desc"
        ))
        .map_err(|e| ServerError::DbError(format!("prepare list cars failed: {e}")))?;

    let rows = stmt
        .query_map([], row_to_vehicle)
        .map_err(|e| ServerError::DbError(format!("list cars failed: {e}")))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(format!("read car row failed: {e}")))?);
    }
    Ok(out)
}

pub fn get_car(conn: &Connection, id: i64) -> Result<Option<Vehicle>, ServerError> {
    conn.query_row(
        &format!("select {CAR_COLUMNS} from cars where id = ?"),
        params![id],
        row_to_vehicle,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select car failed: {e}")))
}

pub fn cars_by_ids(conn: &Connection, ids: &[i64]) -> Result<Vec<Vehicle>, ServerError> {
    let mut out = Vec::with_capacity(ids.len());
    for id in ids {
        if let Some(v) = get_car(conn, *id)? {
            out.push(v);
        }
    }
    Ok(out)
}

pub fn insert_car(conn: &Connection, car: &VehicleDraft, now: i64) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        insert into cars (brand, model, year, price, mileage, body_type, status,
                          color, engine, transmission, description, image_url, created_at)
        values (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
        params![
            car.brand,
            car.model,
            car.year,
            car.price,
            car.mileage,
            car.body_type,
            car.status,
            car.color,
            car.engine,
            car.transmission,
            car.description,
            car.image_url,
            now
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert car failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

/// Returns false when no car has this id.
pub fn update_car(conn: &Connection, id: i64, car: &VehicleDraft) -> Result<bool, ServerError> {
    let updated = conn
        .execute(
            r#"
            update cars set
              brand = ?, model = ?, year = ?, price = ?, mileage = ?, body_type = ?, status = ?,
              color = ?, engine = ?, transmission = ?, description = ?, image_url = ?
            where id = ?
            "#,
            params![
                car.brand,
                car.model,
                car.year,
                car.price,
                car.mileage,
                car.body_type,
                car.status,
                car.color,
                car.engine,
                car.transmission,
                car.description,
                car.image_url,
                id
            ],
        )
        .map_err(|e| ServerError::DbError(format!("update car failed: {e}")))?;

    Ok(updated == 1)
}

pub fn delete_car(conn: &Connection, id: i64) -> Result<bool, ServerError> {
    let deleted = conn
        .execute("delete from cars where id = ?", params![id])
        .map_err(|e| ServerError::DbError(format!("delete car failed: {e}")))?;
    Ok(deleted == 1)
}

pub fn count_cars(conn: &Connection) -> Result<i64, ServerError> {
    conn.query_row("select count(*) from cars", [], |r| r.get(0))
        .map_err(|e| ServerError::DbError(format!("count cars failed: {e}")))
}
