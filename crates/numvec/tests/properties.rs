use approx::assert_relative_eq;
use numvec::*;

const SEED: u64 = 0x6e75_6d76_6563_0001;

fn random_f64s(rng: &mut fastrand::Rng, dim: usize) -> Vec<f64> {
    (0..dim).map(|_| (rng.f64() - 0.5) * 2000.0).collect()
}

fn random_i32s(rng: &mut fastrand::Rng, dim: usize) -> Vec<i32> {
    (0..dim).map(|_| rng.i32(-1000..=1000)).collect()
}

#[test]
fn copy_casts_every_element() {
    numvec::init_logger!();

    let mut rng = fastrand::Rng::with_seed(SEED);
    for dim in 0..16 {
        let elems = random_f64s(&mut rng, dim);
        let src = DVector::from_vec(elems.clone());

        let ints = DVector::<i32>::cast_from(&src);
        let bytes = DVector::<u8>::cast_from(&src);
        let singles = DVector::<f32>::cast_from(&src);
        assert_eq!(ints.dim(), dim);
        assert_eq!(bytes.dim(), dim);
        assert_eq!(singles.dim(), dim);
        for (i, &x) in elems.iter().enumerate() {
            assert_eq!(ints[i], x as i32);
            assert_eq!(bytes[i], x as u8);
            assert_eq!(singles[i], x as f32);
        }

        assert_eq!(src, elems[..]);
        assert!(src.owns_buffer());
    }
}

#[test]
fn same_type_move_hands_over_the_buffer() {
    let mut rng = fastrand::Rng::with_seed(SEED);
    for dim in 1..16 {
        let elems = random_i32s(&mut rng, dim);
        let a = DVector::from_vec(elems.clone());
        let ptr = a.as_ptr();

        let b = DVector::<i32>::from_vector(a);
        assert_eq!(b, elems[..]);
        assert_eq!(b.as_ptr(), ptr);
        assert!(b.owns_buffer());
    }
}

#[test]
fn same_width_move_converts_values_in_place() {
    let mut rng = fastrand::Rng::with_seed(SEED);
    let elems = random_i32s(&mut rng, 9);
    let a = DVector::from_vec(elems.clone());
    let ptr = a.as_ptr() as *const u8;

    let b = DVector::<f32>::from_vector(a);
    assert_eq!(b.as_ptr() as *const u8, ptr);
    for (i, &x) in elems.iter().enumerate() {
        assert_eq!(b[i], x as f32);
    }

    let c = DVector::<u32>::from_vector(b);
    assert_eq!(c.as_ptr() as *const u8, ptr);
    for (i, &x) in elems.iter().enumerate() {
        assert_eq!(c[i], x as f32 as u32);
    }
}

#[test]
fn add_then_sub_restores_left_operand() {
    let mut rng = fastrand::Rng::with_seed(SEED);
    for dim in 0..16 {
        let a = DVector::from_vec(random_f64s(&mut rng, dim));
        let b = DVector::from_vec(random_i32s(&mut rng, dim));

        let sum = (&a + &b).unwrap();
        for i in 0..dim {
            assert_eq!(sum[i], a[i] + f64::from(b[i]));
        }

        let back = (&sum - &b).unwrap();
        for i in 0..dim {
            assert_relative_eq!(back[i], a[i], epsilon = 1e-9);
        }

        let mut compound = a.clone();
        compound.try_add_assign(&b).unwrap().try_sub_assign(&b).unwrap();
        for i in 0..dim {
            assert_relative_eq!(compound[i], a[i], epsilon = 1e-9);
        }
    }
}

#[test]
fn scalar_multiplication_commutes() {
    let mut rng = fastrand::Rng::with_seed(SEED);
    for dim in 0..16 {
        let a = DVector::from_vec(random_f64s(&mut rng, dim));
        let k = rng.f64() * 10.0;
        assert_eq!(&a * k, k * &a);

        let ints = DVector::from_vec(random_i32s(&mut rng, dim));
        let k = rng.i32(-10..=10);
        assert_eq!(&ints * k, k * &ints);

        let fixed = Vector::<i32, 4>::from_fn(|_| rng.i32(-1000..=1000));
        assert_eq!(&fixed * k, k * &fixed);
    }
}

#[test]
fn dot_is_symmetric_and_positive() {
    let mut rng = fastrand::Rng::with_seed(SEED);
    for dim in 0..16 {
        let a = DVector::from_vec(random_f64s(&mut rng, dim));
        let b = DVector::from_vec(random_f64s(&mut rng, dim));

        assert!(a.try_dot(&a).unwrap() >= 0.0);
        assert_relative_eq!((&a * &b).unwrap(), (&b * &a).unwrap());
    }

    let a = Vector::<f32, 5>::from_fn(|_| rng.f32() - 0.5);
    let b = Vector::<f32, 5>::from_fn(|_| rng.f32() - 0.5);
    assert!(a.length2() >= 0.0);
    assert_relative_eq!(a.dot(&b), b.dot(&a));
}

#[test]
fn cross_product() {
    assert_eq!(vec3(1, 0, 0).cross(&vec3(0, 1, 0)), vec3(0, 0, 1));

    let mut rng = fastrand::Rng::with_seed(SEED);
    for _ in 0..32 {
        let a = Vec3::<i64>::from_fn(|_| rng.i64(-1000..=1000));
        let b = Vec3::<i64>::from_fn(|_| rng.i64(-1000..=1000));
        let ab = a.cross(&b);
        assert_eq!(ab, -&b.cross(&a));
        assert_eq!(ab.dot(&a), 0);
        assert_eq!(ab.dot(&b), 0);

        let da = a.clone().into_dynamic();
        let db = b.clone().into_dynamic();
        assert_eq!(da.try_cross(&db).unwrap(), ab);
    }

    let two = DVector::<f32>::zeroed(2);
    assert_eq!(
        two.try_cross(&two).unwrap_err(),
        VectorError::DimensionMismatch {
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn fill_visits_each_index() {
    let mut d = DVector::<i32>::zeroed(3);
    let ptr = d.as_ptr();
    d.fill(|i| 2 * i as i32);
    assert_eq!(d, [0, 2, 4]);
    assert_eq!(d.as_ptr(), ptr);

    let mut f = Vec3::<u8>::zeroed();
    f.fill(|i| 2 * i as u8);
    assert_eq!(f, [0, 2, 4]);
}

#[test]
fn mismatched_dimensions_are_reported() {
    let a = DVector::<f64>::splat(3, 1.0);
    let b = DVector::<f64>::splat(4, 1.0);
    let err = VectorError::DimensionMismatch {
        expected: 3,
        found: 4,
    };
    assert_eq!((&a + &b).unwrap_err(), err);
    assert_eq!((&a - &b).unwrap_err(), err);
    assert_eq!(a.try_dot(&b).unwrap_err(), err);
    assert_eq!(
        err.to_string(),
        "dimension mismatch: expected 3, found 4"
    );
}

#[test]
fn reassign_resizes_storage() {
    let mut target = DVector::<i64>::zeroed(3);
    let src = DVector::from_vec(vec![1.5f32, -2.5, 3.0, 4.75, 5.0]);
    target.assign(&src);
    assert_eq!(target.dim(), 5);
    assert_eq!(target, [1, -2, 3, 4, 5]);
    assert!(target.owns_buffer());

    let mut target = DVector::<i64>::zeroed(3);
    target.assign_from(src);
    assert_eq!(target, [1, -2, 3, 4, 5]);
}

#[test]
fn views_write_through_and_copies_detach() {
    let mut storage = [0u16; 4];
    {
        let mut view = DVector::view(&mut storage);
        assert!(view.is_view());
        view.fill(|i| i as u16 * 10);

        let mut copy = view.clone();
        assert!(copy.owns_buffer());
        copy[0] = 999;
        assert_eq!(view[0], 0);

        view *= 2u16;
    }
    assert_eq!(storage, [0, 20, 40, 60]);

    let mut raw = [1.0f32, 2.0, 3.0];
    let v = Vector::view(&mut raw);
    let owned = v.into_owned();
    assert!(owned.owns_buffer());
    assert_eq!(owned, raw);
}

#[test]
fn checked_and_unchecked_access() {
    let mut v = vec4(1i32, 2, 3, 4);
    assert_eq!(v.get(3), Ok(&4));
    assert_eq!(
        v.get(4),
        Err(VectorError::OutOfRange { index: 4, dim: 4 })
    );
    *v.get_mut(0).unwrap() = 10;
    // SAFETY: `1 < 4`.
    unsafe {
        *v.get_unchecked_mut(1) += 5;
        assert_eq!(*v.get_unchecked(1), 7);
    }
    assert_eq!(v, [10, 7, 3, 4]);
}

#[test]
fn allocation_failure_is_reported() {
    let err = DVector::<u64>::try_zeroed(usize::MAX / 4).unwrap_err();
    assert_eq!(err, VectorError::Allocation { requested: usize::MAX });
    assert!(err.to_string().starts_with("failed to allocate"));

    let fixed = Vector::<f64, { usize::MAX / 4 }>::try_zeroed();
    assert!(matches!(fixed, Err(VectorError::Allocation { .. })));

    let src = DVector::from_vec(vec![1u8, 2]);
    let copy = DVector::<u32>::try_cast_from(&src).unwrap();
    assert_eq!(copy, [1, 2]);
}

#[test]
fn integer_arithmetic_wraps() {
    let a = DVector::from_vec(vec![200u8, 10]);
    let b = DVector::from_vec(vec![100u8, 20]);
    assert_eq!((&a + &b).unwrap(), [44, 30]);
    assert_eq!((&a - &b).unwrap(), [100, 246]);
    assert_eq!(a.try_dot(&b).unwrap(), 200u8.wrapping_mul(100).wrapping_add(200));

    let v = vec3(100i8, -100, 1);
    assert_eq!(&v * 2i8, [-56, 56, 2]);
    assert_eq!(&vec2(1u32, 5) - &vec2(2u32, 1), [u32::MAX, 4]);
}
