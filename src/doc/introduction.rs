/*!
# Introductory Tutorial for ESScript

An ESScript program is a plain text file. Every line is one instruction
and lines are numbered from 1. Run a script by passing its path.

<pre><code>&nbsp;$ esscript hello.ess
</code></pre>

Stop a running program with CTRL-C.

Each instruction moves a value from its left side to its right side. The
character right after the first `>` says what to do with the value, and
the instruction ends with `;`. The smallest useful program prints a number.

<pre><code>&nbsp;42>>o;
</code></pre>

<pre><code>&nbsp;> 42
</code></pre>

Here `42` is a number, the second `>` means move, and `o` is standard
output. Numbers written to `o` come out with a `> ` in front. To write
text, send characters to raw output `r` instead. A backslash makes a
character out of the next symbol and `n` is the newline character.

<pre><code>&nbsp;\h>>r;
&nbsp;\i>>r;
&nbsp;n>>r;
</code></pre>

<pre><code>&nbsp;hi
</code></pre>

Values are kept in variables. `v0` through `v255` hold 64-bit integers and
`c0` through `c32767` hold single bytes. Both start out as zero. The
arithmetic operators update their right side in place.

<pre><code>&nbsp;6>>v0;
&nbsp;7>*v0;
&nbsp;v0>>o;
</code></pre>

<pre><code>&nbsp;> 42
</code></pre>

Reading `i` waits for a whole number on standard input. The interpreter
prompts with `< ` first. This program doubles whatever it is given.

<pre><code>&nbsp;i>>v0;
&nbsp;v0>+v0;
&nbsp;v0>>o;
</code></pre>

Control flow uses `?`. When the left side is above zero the program
continues at the line named on the right. Otherwise it goes on to the
next line. Counting down from 3:

<pre><code>&nbsp;3>>v0;
&nbsp;v0>>o;
&nbsp;1>-v0;
&nbsp;v0>?2;
</code></pre>

<pre><code>&nbsp;> 3
&nbsp;> 2
&nbsp;> 1
</code></pre>

A program ends when it runs past its last line or jumps to a line that
does not exist. Lines starting with `//` are comments. They still count
when numbering lines, so a comment added above code moves every jump
target below it.

*/
