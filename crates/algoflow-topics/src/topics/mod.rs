//! One module per topic.

pub mod array;
pub mod bfs;
pub mod binarysearch;
pub mod bubblesort;
pub mod dfs;
pub mod dijkstra;
pub mod dp;
pub mod greedy;
pub mod hashtable;
pub mod heap;
pub mod linkedlist;
pub mod mergesort;
pub mod queue;
pub mod quicksort;
pub mod stack;
pub mod tree;
pub mod twopointer;
