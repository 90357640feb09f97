//! Example walking through each query kind and render path.
//!
//! Run with:
//!   cargo run --example queries -p qbuild

use qbuild::{Conditional, QueryResult, Render, query};
use serde_json::json;

fn main() -> QueryResult<()> {
    // SELECT with chained conditions and pagination.
    let select = query::select("* FROM USER u")
        .where_clause("u.id == :id")
        .and("(u.avg > :avg1 AND u.avg < :avg2)", true)
        .order_by(["u.name", "u.surname"], true)
        .limit_offset(10, 5)?;
    println!("select (raw):      {}", select.to_sql());
    println!(
        "select (rendered): {}",
        select.render(&json!({"id": 5, "avg1": 6.6, "avg2": 9.2}))?
    );

    // INSERT with an auto-named placeholder per column.
    let insert = query::insert("USER", ["name", "surname"]);
    println!(
        "insert:            {}",
        insert.render(&json!({"name": "igor", "surname": "samurovic"}))?
    );

    // The placeholder source can be any serializable struct.
    #[derive(serde::Serialize)]
    struct NewUser<'a> {
        name: &'a str,
        surname: &'a str,
    }
    println!(
        "insert (struct):   {}",
        insert.render_with(&NewUser {
            name: "ana",
            surname: "ivic",
        })?
    );

    // UPDATE with a validated whole-number id.
    let update = query::update("USER", ["name", "surname"]).where_id_eq(7)?;
    println!(
        "update:            {}",
        update.render(&json!({"name": "ana", "surname": "ivic"}))?
    );

    // DELETE with the default id placeholder.
    let delete = query::delete("USER").where_id();
    println!("delete:            {}", delete.render(&json!({"id": 5}))?);

    // Guard flags keep optional filters out of the call site's control flow.
    let include_bots = false;
    let guarded = query::select("* FROM USER")
        .where_clause("active == :active")
        .and("kind != :bot_kind", !include_bots);
    println!("guarded:           {}", guarded.to_sql());

    Ok(())
}
