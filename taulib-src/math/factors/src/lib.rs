//! 約数の列挙。

/// 約数を昇順に列挙する。
///
/// `1..=n` の各候補を順に試すだけの自明な方法で、線形時間。
/// `0` の約数は空列とする。
///
/// ```
/// # use factors::Factors;
/// assert!(45_u32.factors().eq([1, 3, 5, 9, 15, 45]));
/// assert!(53_u32.factors().eq([1, 53]));
/// assert!(1_u32.factors().eq([1]));
/// assert!(0_u32.factors().eq([]));
/// ```
pub trait Factors: Sized {
    fn factors(self) -> impl Iterator<Item = Self>;
}

macro_rules! impl_uint {
    ( $($ty:ty)* ) => { $(
        impl Factors for $ty {
            fn factors(self) -> impl Iterator<Item = Self> {
                let n = self;
                (1..=n).filter(move |&i| n % i == 0)
            }
        }
    )* };
}

impl_uint! { u8 u16 u32 u64 u128 usize }

#[test]
fn sanity_check() {
    assert!(0_u32.factors().eq(None));
    assert!(1_u32.factors().eq([1]));
    assert!(45_u32.factors().eq([1, 3, 5, 9, 15, 45]));
    assert!(53_u32.factors().eq([1, 53]));
    assert!(64_u32.factors().eq([1, 2, 4, 8, 16, 32, 64]));

    assert!(255_u8.factors().eq([1, 3, 5, 15, 17, 51, 85, 255]));
}

#[test]
fn ordered_and_bounded() {
    for n in 1_u64..=3000 {
        let actual: Vec<_> = n.factors().collect();
        assert_eq!(actual.first(), Some(&1));
        assert_eq!(actual.last(), Some(&n));
        assert!(actual.windows(2).all(|w| w[0] < w[1]));
        assert!(actual.iter().all(|&i| n % i == 0));
    }
}

#[test]
fn exhaustive_check() {
    let n_max = 2000;
    let expected = {
        let mut res = vec![vec![]; n_max + 1];
        for i in 1..=n_max {
            for m in (i..=n_max).step_by(i) {
                res[m].push(i);
            }
        }
        res
    };

    for n in 1..=n_max {
        assert!(n.factors().eq(expected[n].iter().copied()));
    }
}
