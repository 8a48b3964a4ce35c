// netify-core/src/application/pipeline.rs

use csv::StringRecord;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

use crate::application::catalog::load_catalog;
use crate::domain::catalog::Catalog;
use crate::domain::classification::ClassificationKind;
use crate::domain::config::PipelineConfig;
use crate::domain::record::OutputRecord;
use crate::error::NetifyError;
use crate::infrastructure::adapters::CsvRecordSink;
use crate::infrastructure::csv::{DelimitedSource, column};
use crate::ports::sink::RecordSink;

/// Number of rows that resolved against the catalog, per source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchCounts {
    pub domains: u64,
    pub ips: u64,
}

#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub applications: usize,
    pub matches: MatchCounts,
    pub output: PathBuf,
}

/// Full conversion run: catalog, then the domains and IPs tables into the output file.
///
/// Both classification tables are opened before the output is created, so a
/// missing input leaves any previous output untouched. A fatal error while
/// streaming leaves the rows written so far in place.
#[instrument(skip(config), fields(data_dir = %config.data_dir.display()))]
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineReport, NetifyError> {
    let catalog = load_catalog(&config.applications_path())?;
    println!(
        "Applications loaded. Number of applications={}.",
        catalog.len()
    );

    let domains = DelimitedSource::open(&config.domains_path())?;
    let ips = DelimitedSource::open(&config.ips_path())?;

    let output = config.output_path();
    let mut sink = CsvRecordSink::create(&output)?;
    let matches = join_and_emit(&catalog, domains, ips, &mut sink)?;

    info!(
        domains = matches.domains,
        ips = matches.ips,
        output = %output.display(),
        "Netify output written"
    );

    Ok(PipelineReport {
        applications: catalog.len(),
        matches,
        output,
    })
}

/// Joins both classification tables against the catalog and streams the
/// resolved rows to `sink`: header, domain rows, then IP rows, each in source order.
pub fn join_and_emit<D, I, S>(
    catalog: &Catalog,
    mut domains: DelimitedSource<D>,
    mut ips: DelimitedSource<I>,
    sink: &mut S,
) -> Result<MatchCounts, NetifyError>
where
    D: Read,
    I: Read,
    S: RecordSink,
{
    sink.write_header()?;

    domains.skip_header()?;
    ips.skip_header()?;

    println!("Indexing domains...");
    let domains = emit_source(catalog, ClassificationKind::Domain, &mut domains, sink)?;

    println!("Indexing IPs...");
    let ips = emit_source(catalog, ClassificationKind::Ip, &mut ips, sink)?;

    sink.flush()?;
    Ok(MatchCounts { domains, ips })
}

fn emit_source<R, S>(
    catalog: &Catalog,
    kind: ClassificationKind,
    source: &mut DelimitedSource<R>,
    sink: &mut S,
) -> Result<u64, NetifyError>
where
    R: Read,
    S: RecordSink,
{
    let layout = kind.layout();
    let mut row = StringRecord::new();
    let mut matched = 0u64;

    while source.next_row(&mut row)? {
        let app_id = column(&row, layout.application, source.name())?;
        let Some(entry) = catalog.get(app_id) else {
            debug!(source = %kind, app_id, "Unknown application, row skipped");
            continue;
        };
        let subject = column(&row, layout.subject, source.name())?;

        sink.write_record(&OutputRecord::resolve(kind, subject, entry))?;
        matched += 1;
    }

    info!(source = %kind, matched, "Source indexed");
    Ok(matched)
}
