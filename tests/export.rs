use anyhow::Result;

use damonrec::export::{write_csv, write_json, write_table, Summary};
use damonrec::{decode_bytes, DamonResult, DecoderConfig};

mod common;
use common::{single_region_file, RecFile};

fn two_record_result() -> Result<DamonResult> {
    let file = RecFile::new()
        .record(0, 500, 1)
        .snapshot(0, 1)
        .region(0x1000, 0x2000, 5)
        .record(0, 800, 1)
        .snapshot(0, 2)
        .region(0x1000, 0x1800, 0)
        .region(0x1800, 0x2000, 9);
    Ok(decode_bytes(file.bytes(), &DecoderConfig::default())?)
}

#[test]
fn table_matches_converter_layout() -> Result<()> {
    let res = decode_bytes(single_region_file().bytes(), &DecoderConfig::default())?;
    let mut out = Vec::new();
    write_table(&mut out, &res)?;

    let expected = "\
base_time_absolute: 0

monitoring_start:                   0
monitoring_end:                   500
monitoring_duration:              500
target_id: 0
nr_regions: 1
# start_addr     end_addr        length  nr_accesses   age
000000001000-000000002000 (        4096)           5    -1

";
    assert_eq!(String::from_utf8(out)?, expected);
    Ok(())
}

#[test]
fn table_times_are_relative_to_first_snapshot() -> Result<()> {
    // первая запись пустая: base = start первого снапшота = 1 s
    let file = RecFile::new().record(1, 0, 0).record(2, 0, 1).snapshot(0, 0);
    let res = decode_bytes(file.bytes(), &DecoderConfig::default())?;
    let mut out = Vec::new();
    write_table(&mut out, &res)?;

    let expected = "\
base_time_absolute: 1000000000

monitoring_start:                   0
monitoring_end:            1000000000
monitoring_duration:       1000000000
target_id: 0
nr_regions: 0
# start_addr     end_addr        length  nr_accesses   age

";
    assert_eq!(String::from_utf8(out)?, expected);
    Ok(())
}

#[test]
fn table_of_empty_result_is_empty() -> Result<()> {
    let mut out = Vec::new();
    write_table(&mut out, &DamonResult::default())?;
    assert!(out.is_empty());
    Ok(())
}

#[test]
fn csv_has_row_per_region_and_blank_separators() -> Result<()> {
    let res = two_record_result()?;
    let mut out = Vec::new();
    write_csv(&mut out, &res)?;

    let expected = "\
start_time,end_time,target_id,start_addr,end_addr,nr_accesses,age
0,500,0,4096,8192,5,-1

500,800,0,4096,6144,0,-1
500,800,0,6144,8192,9,-1

";
    assert_eq!(String::from_utf8(out)?, expected);
    Ok(())
}

#[test]
fn json_roundtrips_through_serde() -> Result<()> {
    let res = two_record_result()?;

    let mut compact = Vec::new();
    write_json(&mut compact, &res, false)?;
    assert!(compact.ends_with(b"\n"));
    assert_eq!(compact.iter().filter(|&&b| b == b'\n').count(), 1);

    let back: DamonResult = serde_json::from_slice(&compact)?;
    assert_eq!(back, res);

    let mut pretty = Vec::new();
    write_json(&mut pretty, &res, true)?;
    let v: serde_json::Value = serde_json::from_slice(&pretty)?;
    assert_eq!(v["Version"], 2);
    assert_eq!(v["Records"][1]["TargetId"], 0);
    assert_eq!(v["Records"][1]["Snapshots"][0]["StartTime"], 500);
    assert_eq!(v["Records"][1]["Snapshots"][0]["Regions"][1]["NumberOfAccesses"], 9);
    Ok(())
}

#[test]
fn summary_counts() -> Result<()> {
    let res = two_record_result()?;
    let s = Summary::of(&res);
    assert_eq!(s.version, 2);
    assert_eq!(s.records, 2);
    assert_eq!(s.snapshots, 2);
    assert_eq!(s.regions, 3);
    assert_eq!(s.first_start, Some(0));
    assert_eq!(s.last_end, Some(800));
    assert_eq!(s.duration_ns, 800);
    assert_eq!(s.max_regions_per_snapshot, 2);
    assert_eq!(s.total_accesses, 14);
    assert_eq!(s.empty_records, 0);

    let mut text = Vec::new();
    s.write_text(&mut text)?;
    let text = String::from_utf8(text)?;
    assert!(text.contains("snapshots        = 2"));
    assert!(text.contains("time_range_ns    = [0 .. 800]"));

    let mut js = Vec::new();
    s.write_json(&mut js)?;
    let v: serde_json::Value = serde_json::from_slice(&js)?;
    assert_eq!(v["regions"], 3);
    Ok(())
}

#[test]
fn summary_of_empty_file() -> Result<()> {
    let res = decode_bytes(RecFile::new().record(1, 0, 0).bytes(), &DecoderConfig::default())?;
    let s = Summary::of(&res);
    assert_eq!(s.records, 1);
    assert_eq!(s.empty_records, 1);
    assert_eq!(s.first_start, None);

    let mut text = Vec::new();
    s.write_text(&mut text)?;
    assert!(String::from_utf8(text)?.contains("(no snapshots)"));
    Ok(())
}
