/// Итеративный перебор всех сочетаний C(n, 5) по индексам.
///
/// Без рекурсии и без аллокаций: состояние – массив из пяти индексов,
/// который сдвигается как "одометр". Для n = 5, 6, 7 даёт 1, 6, 21 сочетание.
#[derive(Clone, Debug)]
pub struct FiveOf {
    n: usize,
    idx: [usize; 5],
    done: bool,
}

impl FiveOf {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            idx: [0, 1, 2, 3, 4],
            done: n < 5,
        }
    }

    /// Число сочетаний C(n, 5).
    pub fn total(n: usize) -> usize {
        if n < 5 {
            return 0;
        }
        (0..5).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }
}

impl Iterator for FiveOf {
    type Item = [usize; 5];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.idx;

        // Ищем самую правую позицию, которую ещё можно сдвинуть.
        let mut i = 5;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.idx[i] < self.n - 5 + i {
                self.idx[i] += 1;
                for j in (i + 1)..5 {
                    self.idx[j] = self.idx[j - 1] + 1;
                }
                break;
            }
        }

        Some(current)
    }
}
