//! Database operations for categories.

use rusqlite::{Connection, Row};

use crate::{Error, category::Category};

/// Create a category and return it with its generated ID.
pub fn create_category(name: &str, connection: &Connection) -> Result<Category, Error> {
    connection.execute("INSERT INTO category (type) VALUES (?1);", (name,))?;

    let id = connection.last_insert_rowid();

    Ok(Category {
        id,
        name: name.to_string(),
    })
}

/// Retrieve all categories ordered by ID.
pub fn get_all_categories(connection: &Connection) -> Result<Vec<Category>, Error> {
    connection
        .prepare("SELECT id, type FROM category ORDER BY id ASC;")?
        .query_map([], map_row)?
        .map(|maybe_category| maybe_category.map_err(|error| error.into()))
        .collect()
}

/// Initialize the category table.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY,
            type TEXT NOT NULL
        );",
        (),
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

#[cfg(test)]
mod category_query_tests {
    use rusqlite::Connection;

    use super::{create_category, create_category_table, get_all_categories};

    fn get_test_db_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        create_category_table(&connection).expect("Could not create category table");
        connection
    }

    #[test]
    fn create_category_succeeds() {
        let connection = get_test_db_connection();

        let category = create_category("Science", &connection);

        let got_category = category.expect("Could not create category");
        assert!(got_category.id > 0);
        assert_eq!(got_category.name, "Science");
    }

    #[test]
    fn get_all_categories_returns_categories_in_id_order() {
        let connection = get_test_db_connection();
        let science = create_category("Science", &connection).expect("Could not create category");
        let art = create_category("Art", &connection).expect("Could not create category");

        let categories = get_all_categories(&connection).expect("Could not get all categories");

        assert_eq!(categories, vec![science, art]);
    }

    #[test]
    fn get_all_categories_on_empty_table_returns_empty_vec() {
        let connection = get_test_db_connection();

        let categories = get_all_categories(&connection).expect("Could not get all categories");

        assert!(categories.is_empty());
    }
}
