use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 10_000;
const WORD_LEN: usize = 12;
const ALPHANUMERIC: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

fn gen_word<R: Rng>(rng: &mut R) -> String {
    (0..WORD_LEN)
        .map(|_| ALPHANUMERIC[rng.gen_range(0, ALPHANUMERIC.len())] as char)
        .collect()
}

fn gen_words(seed: [u32; 4]) -> Vec<String> {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed(seed);
    (0..NUM_OF_OPERATIONS).map(|_| gen_word(&mut rng)).collect()
}

fn bench_btreeset_insert(c: &mut Criterion) {
    let words = gen_words([1, 1, 1, 1]);
    c.bench_function("bench btreeset insert", |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for word in &words {
                set.insert(word.clone());
            }
        })
    });
}

fn bench_btreeset_contains(c: &mut Criterion) {
    let set: BTreeSet<String> = gen_words([1, 1, 1, 1]).into_iter().collect();
    let queries = gen_words([2, 2, 2, 2]);
    c.bench_function("bench btreeset contains", move |b| {
        b.iter(|| {
            for word in &queries {
                black_box(set.contains(word));
            }
        })
    });
}

macro_rules! ordered_set_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use avl_collections::$module_name::$type_name;
                use criterion::{Criterion, black_box};
                use super::gen_words;

                pub fn bench_insert(c: &mut Criterion) {
                    let words = gen_words([1, 1, 1, 1]);
                    c.bench_function(&format!("bench {} insert", stringify!($module_name)), |b| b.iter(|| {
                        let mut set = $type_name::new();
                        for word in &words {
                            set.insert(word.clone());
                        }
                    }));
                }

                pub fn bench_contains_hit(c: &mut Criterion) {
                    let words = gen_words([1, 1, 1, 1]);
                    let set: $type_name<String> = words.iter().cloned().collect();

                    c.bench_function(&format!("bench {} contains hit", stringify!($module_name)), move |b| b.iter(|| {
                        for word in &words {
                            black_box(set.contains(word));
                        }
                    }));
                }

                pub fn bench_contains_miss(c: &mut Criterion) {
                    let set: $type_name<String> = gen_words([1, 1, 1, 1]).into_iter().collect();
                    let queries = gen_words([2, 2, 2, 2]);

                    c.bench_function(&format!("bench {} contains miss", stringify!($module_name)), move |b| b.iter(|| {
                        for word in &queries {
                            black_box(set.contains(word));
                        }
                    }));
                }

                pub fn bench_remove(c: &mut Criterion) {
                    let words = gen_words([1, 1, 1, 1]);
                    let set: $type_name<String> = words.iter().cloned().collect();

                    c.bench_function(&format!("bench {} remove", stringify!($module_name)), move |b| b.iter(|| {
                        let mut set = set.clone();
                        for word in &words {
                            black_box(set.remove(word));
                        }
                    }));
                }
            }
        )*

        criterion_group!(
            benches,
            bench_btreeset_insert,
            bench_btreeset_contains,
            $(
                $module_name::bench_insert,
                $module_name::bench_contains_hit,
                $module_name::bench_contains_miss,
                $module_name::bench_remove,
            )*
        );
    }
}

ordered_set_benches!(
    avl_tree: AvlSet,
    skiplist: SkipSet,
);

criterion_main!(benches);
