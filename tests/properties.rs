//! 두 계산식의 성질을 임의 입력으로 확인한다.

use approx::assert_relative_eq;
use proptest::prelude::*;
use separation_benchmark::adsorption::lifetime_factor;
use separation_benchmark::extraction::{log_space, stage_count};

proptest! {
    /// 유효 입력에서 단수는 유한하고 음수가 아니며 β가 커지면 줄어든다.
    #[test]
    fn stages_finite_and_strictly_decreasing(
        beta in 1.001f64..1.0e4,
        factor in 1.01f64..100.0,
        feed in 0.01f64..0.49,
        gap in 0.01f64..0.5,
    ) {
        let target = feed + gap;
        let n_low = stage_count(beta, target, feed).expect("valid input");
        let n_high = stage_count(beta * factor, target, feed).expect("valid input");
        prop_assert!(n_low.is_finite() && n_low >= 0.0);
        prop_assert!(n_high.is_finite() && n_high >= 0.0);
        prop_assert!(n_high < n_low, "N({}) = {} !< N({}) = {}", beta * factor, n_high, beta, n_low);
    }

    /// β ≤ 1 은 순도와 무관하게 항상 거부된다.
    #[test]
    fn non_separating_beta_always_rejected(
        beta in -10.0f64..=1.0,
        feed in 0.01f64..0.49,
        gap in 0.01f64..0.5,
    ) {
        prop_assert!(stage_count(beta, feed + gap, feed).is_err());
    }

    /// 상대 수명은 항상 양수이고, |new| > |ref| 일 때만 1보다 크다.
    #[test]
    fn lifetime_positive_and_ordered(
        e_new in -200.0f64..200.0,
        e_ref in -200.0f64..200.0,
        t in 200.0f64..1000.0,
    ) {
        prop_assume!((e_new.abs() - e_ref.abs()).abs() > 1e-6);
        let f = lifetime_factor(e_new, e_ref, t).expect("positive temperature");
        prop_assert!(f > 0.0);
        prop_assert_eq!(f > 1.0, e_new.abs() > e_ref.abs());
    }

    /// 인자를 바꾼 두 배수의 곱은 1이다.
    #[test]
    fn lifetime_inverse_product_is_one(
        a in -200.0f64..200.0,
        b in -200.0f64..200.0,
        t in 200.0f64..1000.0,
    ) {
        let forward = lifetime_factor(a, b, t).expect("positive temperature");
        let backward = lifetime_factor(b, a, t).expect("positive temperature");
        assert_relative_eq!(forward * backward, 1.0, max_relative = 1e-9);
    }

    /// 0 K 이하 온도는 항상 거부된다.
    #[test]
    fn non_positive_temperature_rejected(t in -1000.0f64..=0.0) {
        prop_assert!(lifetime_factor(-85.0, -45.0, t).is_err());
    }

    /// 로그 등간격 수열은 양 끝을 포함하고 단조 증가한다.
    #[test]
    fn log_space_hits_both_ends(start in -3.0f64..0.0, span in 0.5f64..6.0, count in 2usize..200) {
        let values = log_space(start, start + span, count);
        prop_assert_eq!(values.len(), count);
        assert_relative_eq!(values[0], 10f64.powf(start), max_relative = 1e-12);
        assert_relative_eq!(values[count - 1], 10f64.powf(start + span), max_relative = 1e-9);
        prop_assert!(values.windows(2).all(|w| w[0] < w[1]));
    }
}
