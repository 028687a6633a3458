use ride_core::record::RideRecord;

use crate::metrics::DriverSummary;

pub(crate) fn export_rides_to_csv_impl(
    rides: &[RideRecord],
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record(["ride_id", "pickup", "dropoff", "distance", "category", "fare"])?;
    for ride in rides {
        wtr.write_record([
            &ride.id().to_string(),
            ride.pickup(),
            ride.dropoff(),
            &ride.distance().to_string(),
            ride.category().as_str(),
            &format!("{:.2}", ride.fare()),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub(crate) fn export_driver_summaries_to_csv_impl(
    summaries: &[DriverSummary],
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record([
        "driver_id",
        "name",
        "rating",
        "rides",
        "total_fare",
        "average_fare",
    ])?;
    for summary in summaries {
        wtr.write_record([
            &summary.driver_id.to_string(),
            &summary.name,
            &summary.rating.to_string(),
            &summary.rides.to_string(),
            &format!("{:.2}", summary.total_fare),
            &format!("{:.2}", summary.average_fare),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
