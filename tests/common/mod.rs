//! Shared fixtures for the integration test suite.
//!
//! `OPERATING_SYSTEMS_JSON` is a grokked-CPE dataset ported from the upstream
//! `product_search` project's own `operating_systems` test fixture, used there to
//! exercise exact, approximate, and strict-mode matching against a realistic (if small)
//! set of OS product titles.

#![allow(dead_code)]

use match_string_trie::loader;
use match_string_trie::{EngineOptions, MatchStringTrie, Title};

pub const OPERATING_SYSTEMS_JSON: &str = r#"{
    "Canonical Ubuntu Linux 14.04.1": [["canonical", null], ["ubuntu linux", "ubuntu"], ["14"], ["04"], ["1"]],
    "Canonical Ubuntu Linux 19.04": [["canonical", null], ["ubuntu linux", "ubuntu"], ["19"], ["04"]],
    "Microsoft Windows Vista": [["microsoft", null], ["windows"], ["vista"]],
    "Microsoft Windows Server 2012 R2": [["microsoft", null], ["windows"], ["server"], ["2012"], ["r2"]],
    "Microsoft Windows Server 2012 R2 Service Pack 1 on X64": [["microsoft", null], ["windows"], ["server"], ["2012"], ["r2"], ["sp1"], ["x64"]],
    "Microsoft Windows 10 1507 64-bit": [["microsoft", null], ["windows"], ["10"], ["1507"], ["x64"]],
    "Microsoft Windows 10 1507 32-bit": [["microsoft", null], ["windows"], ["10"], ["1507"], ["x86"]],
    "Cisco IOS 11.1": [["cisco", null], ["ios"], ["11"], ["1"]],
    "Cisco IOS 11.1.13 IA": [["cisco", null], ["ios"], ["11"], ["1"], ["13"]],
    "Apple iPhone OS 5.0.1": [["apple", null], ["iphone", "ios"], ["os", null], ["5"], ["0"], ["1"]],
    "Apple iPhone OS 5.0.1 iPad": [["apple", null], ["iphone", "ios"], ["os", null], ["5"], ["0"], ["1"], ["ipad"]],
    "Apple iPhone OS 5.0.1 iPhone": [["apple", null], ["iphone", "ios"], ["os", null], ["5"], ["0"], ["1"], ["iphone"]],
    "Apple iPhone OS 5.0.1 iPod touch": [["apple", null], ["iphone", "ios"], ["os", null], ["5"], ["0"], ["1"], ["ipodtouch"]],
    "Apple iPhone OS 11.1.13": [["apple", null], ["iphone", "ios"], ["os", null], ["11"], ["1"], ["13"]],
    "Apple iPad OS 16.1": [["apple", null], ["ipados"], ["16"], ["1"]],
    "Apple iPad OS 16.1.2": [["apple", null], ["ipados"], ["16"], ["1"], ["2"]],
    "Apple iPad OS 16.1.4": [["apple", null], ["ipados"], ["16"], ["1"], ["4"]],
    "Apple iPad OS -": [["apple", null], ["ipados"]],
    "Apple macOS 13.0": [["apple", null], ["macos"], ["13"], ["0"]],
    "Apple macOS 13.0.1": [["apple", null], ["macos"], ["13"], ["0"], ["1"]],
    "Apple macOS 13.1": [["apple", null], ["macos"], ["13"], ["1"]],
    "Red Hat Enterprise Linux 8.6 Server Edition": [["redhat", null], ["enterprise"], ["linux"], ["8"], ["6"]]
}"#;

/// Builds an eager engine over the `operating_systems` fixture with the given options'
/// scoring strategy, leaving `eager_load` forced on so every test sees a built trie.
pub fn build_os_engine(mut options: EngineOptions) -> MatchStringTrie {
    options.eager_load = true;
    let titles = loader::parse_titles(OPERATING_SYSTEMS_JSON).expect("fixture must parse");
    MatchStringTrie::new(titles, options, None)
}

pub fn terms(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

pub fn title(s: &str) -> Title {
    std::sync::Arc::from(s)
}
