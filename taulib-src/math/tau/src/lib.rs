use factors::Factors;

/// 約数の個数 $\tau(n)$。
///
/// ```
/// # use tau::Tau;
/// assert_eq!(45_u32.tau(), 6);
/// assert_eq!(53_u32.tau(), 2);
/// assert_eq!(0_u32.tau(), 0);
/// ```
pub trait Tau {
    fn tau(self) -> usize;
}

macro_rules! impl_uint {
    ( $($ty:ty)* ) => { $(
        impl Tau for $ty {
            fn tau(self) -> usize { self.factors().count() }
        }
    )* };
}

impl_uint! { u8 u16 u32 u64 u128 usize }

#[test]
fn sanity_check() {
    assert_eq!(0_u32.tau(), 0);
    assert_eq!(1_u32.tau(), 1);
    assert_eq!(45_u32.tau(), 6);
    assert_eq!(53_u32.tau(), 2);
    assert_eq!(64_u32.tau(), 7);
}

#[test]
fn primes_have_two() {
    let primes = (2_u32..100).filter(|&n| (2..n).all(|i| n % i != 0));
    for p in primes {
        assert_eq!(p.tau(), 2);
    }
}

#[test]
fn multiplicative() {
    fn gcd(mut a: u64, mut b: u64) -> u64 {
        while b != 0 {
            let tmp = a % b;
            a = std::mem::replace(&mut b, tmp);
        }
        a
    }

    for a in 1_u64..=60 {
        for b in 1_u64..=60 {
            if gcd(a, b) == 1 {
                assert_eq!((a * b).tau(), a.tau() * b.tau());
            }
        }
    }
}
