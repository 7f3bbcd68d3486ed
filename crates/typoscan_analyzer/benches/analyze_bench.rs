use criterion::{black_box, criterion_group, criterion_main, Criterion};
use typoscan_analyzer::analyze_source;
use typoscan_speller::{CachedOracle, DictionaryOracle, Whitelist};

// A medium-size JavaScript source with a handful of seeded typos
const JS_SOURCE: &str = r#"
const userRecords = new Map();
let nextUserId = 1;

function createUser(name, email) {
    const user = {
        id: nextUserId++,
        name,
        email,
        preferences: {
            theme: 'light',
            notifications: true,
            language: 'en'
        }
    };
    userRecords.set(user.id, user);
    return user;
}

function updateUser(id, updates) {
    const user = userRecords.get(id);
    if (!user) return false;
    userRecords.set(id, { ...user, ...updates });
    return true;
}

function removeUser(id) {
    return userRecords.delete(id);
}

// Seeded typos: wrod, lenght, amry
function sumarize() {
    const wrod = [];
    for (const user of userRecords.values()) {
        const lenght = user.name.length;
        wrod.push({ id: user.id, lenght });
    }
    const amry = wrod.filter(entry => entry.lenght > 0);
    console.log(`summary: ${amry.length} of ${wrod.length}`);
    return amry;
}

module.exports = { createUser, updateUser, removeUser, sumarize };
"#;

fn bench_scan(c: &mut Criterion) {
    c.bench_function("scan_identifiers", |b| {
        b.iter(|| typoscan_scanner::scan_identifiers(black_box(JS_SOURCE)))
    });
}

fn bench_analyze(c: &mut Criterion) {
    c.bench_function("analyze_source", |b| {
        b.iter(|| {
            let oracle = CachedOracle::new(DictionaryOracle::builtin());
            analyze_source(black_box(JS_SOURCE), Whitelist::builtin(), &oracle)
        })
    });
}

criterion_group!(benches, bench_scan, bench_analyze);
criterion_main!(benches);
