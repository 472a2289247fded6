use rusqlite::{types::Value, Connection};
use table_actor::{Column, TableActor, TableClient, TableName, TableRow};
use tokio::task::JoinHandle;

// --- Test Row ---

#[derive(Clone, Debug, PartialEq)]
struct Reading {
    sensor: String,
    value: String,
}

#[derive(Debug, thiserror::Error)]
#[error("sensor name is required")]
struct MissingSensor;

impl TableRow for Reading {
    type Error = MissingSensor;
    const COLUMNS: &'static [Column] = &[Column::text("SENSOR"), Column::text("VALUE")];

    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            sensor: row.get(0)?,
            value: row.get(1)?,
        })
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.sensor.clone()),
            Value::Text(self.value.clone()),
        ]
    }

    fn on_append(&self) -> Result<(), MissingSensor> {
        if self.sensor.trim().is_empty() {
            Err(MissingSensor)
        } else {
            Ok(())
        }
    }
}

fn reading(sensor: &str, value: &str) -> Reading {
    Reading {
        sensor: sensor.to_string(),
        value: value.to_string(),
    }
}

fn start(path: &std::path::Path, table: &str) -> (TableClient<Reading>, JoinHandle<()>) {
    let conn = Connection::open(path).unwrap();
    let (actor, client) = TableActor::<Reading>::new(conn, TableName::parse(table).unwrap(), 32);
    actor.ensure_table().unwrap();
    (client, actor.spawn())
}

/// Rows written by one actor survive a restart and are read back in order.
#[tokio::test]
async fn test_rows_survive_actor_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("readings.db");

    let (client, handle) = start(&path, "readings");
    client.append(reading("north", "1")).await.unwrap();
    client.append(reading("south", "2")).await.unwrap();
    drop(client);
    handle.await.unwrap();

    let (client, handle) = start(&path, "readings");
    let rows = client.select_all().await.unwrap();
    assert_eq!(rows, vec![reading("north", "1"), reading("south", "2")]);
    drop(client);
    handle.await.unwrap();
}

/// Two tables in the same database file are served by independent actors.
#[tokio::test]
async fn test_two_tables_share_one_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shared.db");

    let (indoor, indoor_handle) = start(&path, "indoor");
    let (outdoor, outdoor_handle) = start(&path, "outdoor");

    indoor.append(reading("kitchen", "21")).await.unwrap();
    outdoor.append(reading("garden", "9")).await.unwrap();
    outdoor.append(reading("roof", "7")).await.unwrap();

    assert_eq!(indoor.select_all().await.unwrap().len(), 1);
    assert_eq!(outdoor.select_all().await.unwrap().len(), 2);

    drop(indoor);
    drop(outdoor);
    indoor_handle.await.unwrap();
    outdoor_handle.await.unwrap();
}

/// Concurrent appends through cloned clients are serialized by the actor.
#[tokio::test]
async fn test_concurrent_appends() {
    let dir = tempfile::tempdir().unwrap();
    let (client, handle) = start(&dir.path().join("burst.db"), "burst");

    let mut tasks = vec![];
    for i in 0..20 {
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            client.append(reading("probe", &i.to_string())).await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    // A rejected row in the middle of the burst changes nothing
    assert!(client.append(reading("  ", "x")).await.is_err());

    assert_eq!(client.select_all().await.unwrap().len(), 20);

    drop(client);
    handle.await.unwrap();
}
