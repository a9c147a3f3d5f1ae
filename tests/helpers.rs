// Shared test fixtures for the pipeline and export tests.
//
// The fixture mirrors the layout of the land-boundaries page: a <main>
// region holding a header block followed by one div.pb30 per country.

use std::path::Path;

use land_boundaries::{Config, LogFormat, LogLevel};

/// Country blocks in fixture order (header block excluded).
#[allow(dead_code)]
pub const FIXTURE_COUNTRIES: [&str; 4] = ["Tajikistan", "Cyprus", "Antarctica", "Bhutan"];

/// A land-boundaries page with a header block and four country blocks.
#[allow(dead_code)]
pub fn fixture_page() -> String {
    r#"<!DOCTYPE html>
<html lang="en">
<head><title>Land boundaries - The World Factbook</title></head>
<body>
  <nav><div class="pb30"><a href="/the-world-factbook/">The World Factbook</a></div></nav>
  <main>
    <div class="pb30">
      <h1>Land boundaries</h1>
      <p>This entry contains the total length of all land boundaries.</p>
    </div>
    <div class="pb30">
      <h3 class="mt10"><a href="/the-world-factbook/countries/tajikistan/">
        Tajikistan
      </a></h3>
      <strong>total:</strong> 4,130 km
      <br/><br/>
      <strong>border countries (4):</strong>
      Afghanistan 1,357 km; China 477 km; Kyrgyzstan 984 km; Uzbekistan 1,312 km
    </div>
    <div class="pb30">
      <h3 class="mt10"><a href="/the-world-factbook/countries/cyprus/">Cyprus</a></h3>
      <strong>total:</strong> 150.4 km
      <br/><br/>
      <strong>border sovereign base areas:</strong>
      Dhekelia 108 km and 42 km; Akrotiri 47.4 km (including United Kingdom's Episkopi 3 km)
      <br/><br/>
      <strong>note:</strong> the sovereign base areas are British territory
    </div>
    <div class="pb30">
      <h3 class="mt10"><a href="/the-world-factbook/countries/antarctica/">Antarctica</a></h3>
      <p>0 km</p>
    </div>
    <div class="pb30">
      <h3 class="mt10"><a href="/the-world-factbook/countries/bhutan/">Bhutan</a></h3>
      <strong>total:</strong> 1,136 km
      <br/><br/>
      <strong>border countries (2):</strong> China 477 km, India 659 km
    </div>
  </main>
</body>
</html>"#
        .to_string()
}

/// Config pointing at `url` and writing into `output_dir`, with quiet logging.
#[allow(dead_code)]
pub fn test_config(url: String, output_dir: &Path) -> Config {
    Config {
        url,
        output_dir: output_dir.to_path_buf(),
        user_agent: "land_boundaries_test/1.0".to_string(),
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
    }
}

/// Reads a pipe-delimited file into rows of fields (header included).
#[allow(dead_code)]
pub fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .from_path(path)
        .expect("Failed to open CSV output");
    reader
        .records()
        .map(|record| {
            record
                .expect("Failed to read CSV record")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}
