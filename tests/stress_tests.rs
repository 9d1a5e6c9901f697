//! Stress tests that push the heap through long operation sequences
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases in growth and sifting under load.

use simple_heap::SimpleHeap;

/// Linear congruential generator for reproducible random numbers
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn next_range(&mut self, min: u32, max: u32) -> u32 {
        let range = (max - min) as u64;
        if range == 0 {
            return min;
        }
        min + ((self.next() >> 33) % range) as u32
    }
}

/// Test massive numbers of inserts and pops
#[test]
fn test_massive_operations() {
    let mut heap = SimpleHeap::new();

    for i in 0..10_000 {
        heap.insert(i as f32, i);
    }

    assert_eq!(heap.len(), 10_000);
    assert_eq!(heap.capacity(), 16_384);

    for i in 0..10_000 {
        assert_eq!(heap.peek_min_priority(), i as f32);
        assert_eq!(heap.pop_min(), i);
    }

    assert!(heap.is_empty());
}

/// Growth from a zero hint must not corrupt earlier elements
#[test]
fn test_growth_preserves_elements() {
    let mut heap = SimpleHeap::with_capacity(0);
    let mut rng = Lcg::new(7);
    let mut expected = Vec::new();

    for tag in 0..100u32 {
        let priority = rng.next_range(0, 1000) as f32;
        heap.insert(priority, (priority, tag));
        expected.push((priority, tag));
    }
    assert_eq!(heap.len(), 100);

    let mut popped = Vec::new();
    while !heap.is_empty() {
        let priority = heap.peek_min_priority();
        let entry = heap.pop_min();
        assert_eq!(entry.0, priority);
        popped.push(entry);
    }

    assert!(popped.windows(2).all(|w| w[0].0 <= w[1].0));
    popped.sort_by(|a, b| a.1.cmp(&b.1));
    assert_eq!(popped, expected);
}

/// Interleave 50 inserts and 50 pops in random order against a sorted list
#[test]
fn test_random_interleave_against_sorted_list() {
    for seed in 0..20 {
        let mut rng = Lcg::new(seed);
        let mut heap = SimpleHeap::new();
        let mut reference: Vec<f32> = Vec::new();
        let mut heap_out = Vec::new();
        let mut reference_out = Vec::new();

        let (mut inserts, mut pops) = (50, 50);
        while inserts + pops > 0 {
            // A pop is only legal when something is queued
            let do_pop = pops > 0
                && !reference.is_empty()
                && (inserts == 0 || (rng.next() >> 33) % 2 == 0);
            if do_pop {
                heap_out.push(heap.peek_min_priority());
                heap.pop_min();
                reference_out.push(reference.remove(0));
                pops -= 1;
            } else {
                let priority = rng.next_range(0, 40) as f32;
                heap.insert(priority, ());
                let pos = reference.partition_point(|&x| x <= priority);
                reference.insert(pos, priority);
                inserts -= 1;
            }
            assert_eq!(heap.len(), reference.len());
        }

        assert_eq!(heap_out, reference_out, "seed {}", seed);
        assert!(heap.is_empty());
    }
}

/// Test alternating insert and pop at scale
#[test]
fn test_alternating_ops() {
    let mut heap = SimpleHeap::new();

    for i in 0..2000 {
        heap.insert((i * 2) as f32, i);
        heap.insert((i * 2 + 1) as f32, i + 10_000);
        assert!(heap.try_pop_min().is_some());
    }

    assert_eq!(heap.len(), 2000);
    let mut last = f32::NEG_INFINITY;
    while let Some((priority, _)) = heap.try_pop_min() {
        assert!(priority >= last);
        last = priority;
    }
}

/// Test with extreme float priorities
#[test]
fn test_extreme_priorities() {
    let mut heap: SimpleHeap<u8, f64> = SimpleHeap::new();

    heap.insert(1e300, 1);
    heap.insert(-1e300, 2);
    heap.insert(f64::INFINITY, 3);
    heap.insert(f64::NEG_INFINITY, 4);
    heap.insert(0.0, 5);
    heap.insert(-0.0, 6);
    heap.insert(f64::MIN_POSITIVE, 7);

    assert_eq!(heap.pop_min(), 4);
    assert_eq!(heap.pop_min(), 2);
    // 0.0 and -0.0 compare equal; either may come first
    let mut zeros = [heap.pop_min(), heap.pop_min()];
    zeros.sort_unstable();
    assert_eq!(zeros, [5, 6]);
    assert_eq!(heap.pop_min(), 7);
    assert_eq!(heap.pop_min(), 1);
    assert_eq!(heap.pop_min(), 3);
}

/// Many equal priorities mixed with distinct ones
#[test]
fn test_many_duplicates() {
    let mut heap = SimpleHeap::new();
    let mut rng = Lcg::new(99);

    for tag in 0..5000u32 {
        heap.insert(rng.next_range(0, 8) as f32, tag);
    }

    let mut counts = [0usize; 8];
    let mut last = f32::NEG_INFINITY;
    while let Some((priority, _)) = heap.try_pop_min() {
        assert!(priority >= last);
        last = priority;
        counts[priority as usize] += 1;
    }
    assert_eq!(counts.iter().sum::<usize>(), 5000);
}

/// Reuse one heap across many fill/clear cycles
#[test]
fn test_clear_cycles() {
    let mut heap = SimpleHeap::with_capacity(4);
    let mut rng = Lcg::new(1234);
    let mut released = 0usize;

    for cycle in 0..50 {
        let n = rng.next_range(0, 300) as usize;
        for i in 0..n {
            heap.insert(rng.next_range(0, 1000) as f32, i);
        }
        let pops = n / 2;
        let mut last = f32::NEG_INFINITY;
        for _ in 0..pops {
            let priority = heap.peek_min_priority();
            assert!(priority >= last, "cycle {}", cycle);
            last = priority;
            heap.pop_min();
        }

        let capacity = heap.capacity();
        let live = heap.len();
        let before = released;
        heap.clear_with(|_| released += 1);
        assert_eq!(released - before, live);
        assert_eq!(heap.capacity(), capacity);
    }
}
