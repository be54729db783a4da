//! Genome traversal traits.
//!
//! Genomes are either flat vectors of leaf genes or nested vectors of
//! them (a Pitt genome is a list of rules, each rule a list of numbers).
//! These traits let generic operators walk both shapes.

use crate::coders::AdaptiveGene;

/// Size information for flat and nested genomes.
pub trait GenomeSize {
    /// Number of leaf genes, counted recursively through nested vectors.
    fn gene_count(&self) -> usize;

    /// Number of top-level elements (1 for a leaf gene).
    fn length(&self) -> usize {
        1
    }
}

/// Mutable access to every leaf gene of type `T`.
pub trait GeneTree<T>: GenomeSize {
    /// Calls `f` on every leaf gene, depth first, in storage order.
    fn for_each_gene(&mut self, f: &mut dyn FnMut(&mut T));
}

/// Aligned position-wise exchange between two genomes of the same shape.
pub trait Chromosome {
    /// Number of gene positions.
    fn gene_len(&self) -> usize;

    /// Exchanges the gene at `index` with the same position of `other`.
    ///
    /// # Panics
    /// Panics if `index` is out of range for either genome.
    fn swap_gene(&mut self, other: &mut Self, index: usize);
}

macro_rules! leaf_gene {
    ($($t:ty),*) => {
        $(
            impl GenomeSize for $t {
                fn gene_count(&self) -> usize {
                    1
                }
            }

            impl GeneTree<$t> for $t {
                fn for_each_gene(&mut self, f: &mut dyn FnMut(&mut $t)) {
                    f(self);
                }
            }
        )*
    };
}

leaf_gene!(bool, f64, AdaptiveGene);

impl<S: GenomeSize> GenomeSize for Vec<S> {
    fn gene_count(&self) -> usize {
        self.iter().map(GenomeSize::gene_count).sum()
    }

    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, S: GeneTree<T>> GeneTree<T> for Vec<S> {
    fn for_each_gene(&mut self, f: &mut dyn FnMut(&mut T)) {
        for gene in self.iter_mut() {
            gene.for_each_gene(f);
        }
    }
}

impl<T> Chromosome for Vec<T> {
    fn gene_len(&self) -> usize {
        self.len()
    }

    fn swap_gene(&mut self, other: &mut Self, index: usize) {
        std::mem::swap(&mut self[index], &mut other[index]);
    }
}
