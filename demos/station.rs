use gios::{Gios, GiosError, HttpTransport, RefreshOutcome};

const DEFAULT_STATION_ID: u64 = 11794;

#[tokio::main]
async fn main() -> Result<(), GiosError> {
    env_logger::init();

    let station_id = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_STATION_ID);

    let mut client = Gios::new(station_id, HttpTransport::new());

    for _ in 0..2 {
        match client.refresh().await? {
            RefreshOutcome::Complete(_) => println!("Refresh complete"),
            RefreshOutcome::Partial { warnings, .. } => {
                for warning in warnings {
                    println!("Warning: {}", warning);
                }
            }
        }

        println!("Data available: {}", client.is_available());
        println!(
            "Longitude: {:?}, latitude: {:?}, station name: {:?}",
            client.longitude(),
            client.latitude(),
            client.station_name()
        );
        for entry in client.sensors().values() {
            println!(
                "{:>6} {:>8} {:<14} {}",
                entry.code,
                entry
                    .value
                    .map(|v| format!("{:.1}", v))
                    .unwrap_or_else(|| "-".to_string()),
                entry.index.as_deref().unwrap_or("-"),
                entry.name
            );
        }
    }

    Ok(())
}
